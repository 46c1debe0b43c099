use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status(args) => commands::status::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
        Commands::List => commands::list::handle(ctx, flags).await,
        Commands::Forget(args) => commands::forget::handle(&args, ctx, flags).await,
        Commands::Schema | Commands::Backend { .. } => {
            unreachable!("schema/backend are pre-dispatched in main")
        }
    }
}
