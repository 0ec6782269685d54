//! Subcommand handlers. Each prints a plain-text table to stdout.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use arabul_client::ArabulClient;
use arabul_core::{PopularityAggregate, RatingAggregate, SortMode, Supplier};
use arabul_ranker::{Ranking, SupplierRanker};

pub(crate) async fn run_rank(
    client: ArabulClient,
    file: &Path,
    mode: SortMode,
) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read business list {}", file.display()))?;
    let suppliers = arabul_core::parse_business_list(&json)
        .with_context(|| format!("failed to decode business list {}", file.display()))?;

    let timeout = client.timeout();
    let client = Arc::new(client);
    let ranker = SupplierRanker::new(client.clone(), client).with_timeout(timeout);

    tracing::info!(mode = %mode, supplier_count = suppliers.len(), "ranking suppliers");
    let ranking = ranker.rank_detailed(&suppliers, mode).await;
    print!("{}", render_ranking(&ranking));
    Ok(())
}

pub(crate) async fn run_popular(client: &ArabulClient) -> anyhow::Result<()> {
    let counts = client
        .popular_suppliers()
        .await
        .context("failed to fetch popular suppliers")?;
    print!("{}", render_popularity(&counts));
    Ok(())
}

pub(crate) async fn run_ratings(client: &ArabulClient, ids: &[String]) -> anyhow::Result<()> {
    let ratings = client
        .bulk_ratings(ids)
        .await
        .context("failed to fetch supplier ratings")?;
    print!("{}", render_ratings(&ratings));
    Ok(())
}

fn format_distance(supplier: &Supplier) -> String {
    supplier
        .distance_km
        .map_or_else(|| "-".to_string(), |km| format!("{km:.1} km"))
}

pub(crate) fn render_ranking(ranking: &Ranking) -> String {
    let mut out = String::new();
    let _ = write!(out, "mode: {}, ordered by {}", ranking.mode, ranking.basis);
    if let Some(reason) = ranking.fallback {
        let _ = write!(out, " (fallback: {reason})");
    }
    out.push('\n');

    for (position, supplier) in ranking.suppliers.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<10} {:<32} {:>10}",
            position + 1,
            supplier.id,
            supplier.name,
            format_distance(supplier),
        );
    }
    out
}

pub(crate) fn render_popularity(counts: &[PopularityAggregate]) -> String {
    let mut out = String::new();
    for entry in counts {
        let _ = writeln!(out, "{:<10} {:>6}", entry.supplier_id, entry.favorite_count);
    }
    out
}

pub(crate) fn render_ratings(ratings: &[RatingAggregate]) -> String {
    let mut out = String::new();
    for entry in ratings {
        let _ = writeln!(
            out,
            "{:<10} {:>5.2} ({} ratings)",
            entry.supplier_id, entry.average_rating, entry.count
        );
    }
    out
}
