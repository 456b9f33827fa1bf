//! `reorder`: post a zone's full order, as a drop on the board would.

use wire::ReorderRequest;

use crate::{CliContext, CliError, ReorderArgs, endpoint, ensure_success, http_client};

fn build_batch(args: &ReorderArgs) -> Result<ReorderRequest, CliError> {
    if args.ids.is_empty() {
        return Err(CliError::EmptyBatch);
    }
    Ok(ReorderRequest::from_order(args.status, args.ids.iter().map(String::as_str)))
}

pub(crate) async fn run(ctx: &CliContext, args: ReorderArgs) -> Result<(), CliError> {
    let batch = build_batch(&args)?;
    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    let url = endpoint(&ctx.base_url, &args.path)?;
    let client = http_client(ctx)?;
    tracing::info!(%url, status = %args.status, cards = batch.positions.len(), "posting reorder");
    let response = client.post(&url).json(&batch).send().await?;
    ensure_success(response).await?;
    println!("saved {} position(s) in {}", batch.positions.len(), args.status);
    Ok(())
}

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;
