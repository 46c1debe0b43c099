use clap::{Args, Subcommand};
use verity_core::PageIdentity;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report whether a verdict is stored for a page. Never contacts the backend.
    Status(PageArgs),
    /// Show the stored verdict for a page. Never contacts the backend.
    Show(PageArgs),
    /// Fact-check a page and store the verdict.
    Check(CheckArgs),
    /// List pages with a stored verdict, most recent first.
    List,
    /// Remove the stored verdict for a page.
    Forget(PageArgs),
    /// Print the JSON Schema of a stored verdict record.
    Schema,
    /// Call individual backend steps directly.
    Backend {
        #[command(subcommand)]
        action: BackendCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct PageArgs {
    /// Page URL, used verbatim as the cache key.
    pub url: PageIdentity,
}

#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Page URL, used verbatim as the cache key.
    pub url: PageIdentity,
    /// Re-check even if a verdict is already stored.
    #[arg(long)]
    pub force: bool,
}

/// Backend inspection endpoints. Nothing here reads or writes the store.
#[derive(Clone, Debug, Subcommand)]
pub enum BackendCommands {
    /// Extract checkable claims from text.
    ParseClaims {
        /// Text to analyze.
        text: String,
    },
    /// Assess a single claim using a search query.
    CheckClaim {
        /// Claim to check.
        claim: String,
        /// Search query used to gather sources.
        #[arg(long)]
        query: String,
    },
    /// Assess how one source page relates to a claim.
    CheckSite {
        /// Claim to check.
        claim: String,
        /// Source page URL.
        url: String,
    },
}
