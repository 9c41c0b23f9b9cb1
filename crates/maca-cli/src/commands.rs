use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the session, the refreshed profile and remaining entitlement
    Status,

    /// Create an account (falls back to a local account when offline)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        company_name: String,
        #[arg(long)]
        company_type: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Sign in (falls back to the local account when offline)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session token
    Logout,

    /// Update company details on the profile
    SaveProfile {
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        company_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Logo image file (jpeg, png, gif or webp)
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Generate artwork or a video (post, storys, carousel, menu, video, logo)
    Generate {
        mode: String,
        #[arg(long, default_value = "")]
        briefing: String,
        /// Reference image file (jpeg, png, gif or webp)
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Submit a payment proof and grant a subscription when it checks out
    VerifyPayment {
        /// Pasted receipt text
        #[arg(long, default_value = "")]
        text: String,
        /// Receipt screenshot
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Print the conversation history
    History,
}
