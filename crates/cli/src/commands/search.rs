use std::{io::Write, time::Duration};

use clap::Args;
use hotelier_app::context::AppContext;
use tokio::{task::JoinHandle, time::sleep};
use tracing::debug;

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Successive contents of the search box, e.g. `m mi mia miami`
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Pause between edits, in milliseconds
    #[arg(long, default_value_t = 100_u64)]
    pub typing_gap_ms: u64,
}

pub(crate) async fn run(
    args: SearchArgs,
    context: &AppContext,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = context.controller();
    let gap = Duration::from_millis(args.typing_gap_ms);

    let mut pending: Vec<JoinHandle<_>> = Vec::with_capacity(args.terms.len());

    for (index, term) in args.terms.into_iter().enumerate() {
        if index > 0 {
            sleep(gap).await;
        }

        pending.push(tokio::spawn(controller.begin_search(term)));
    }

    let mut sent = 0_usize;

    for handle in pending {
        if controller.apply_search(handle.await?)? {
            sent += 1;
        }
    }

    debug!(sent, "live search settled");

    let state = controller.state();
    let visible = state.visible_hotels();

    render::write_found(out, visible.len())?;
    render::write_hotels(out, &visible)?;

    Ok(())
}
