//! `ecorec feedback` command - leave feedback
//!
//! The CLI keeps no navigation state between invocations. Each run starts a
//! fresh [`Session`] on the main page and replays the feedback flow, so the
//! reported page and return options match what an interactive front end
//! would show. The only state that persists is the appended feedback log.

use crate::cli::{Cli, FeedbackArgs};
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use ecorec_core::activity::FeedbackEntry;
use ecorec_core::error::Result;
use ecorec_core::navigation::{NavAction, Page, Session};
use ecorec_core::store::Store;

/// Execute the feedback command
pub fn execute(cli: &Cli, store: &Store, args: &FeedbackArgs) -> Result<()> {
    let entry = FeedbackEntry::new(args.name.trim(), args.comment.trim())?;

    let mut session = Session::new();
    session.apply(NavAction::Select(Page::Feedback));
    store.add_feedback(&entry)?;
    let page = session.apply(NavAction::SubmitFeedback);

    let home = page.transition(NavAction::ReturnHome);
    let explore = page.transition(NavAction::ExploreAgain);

    output_by_format_result!(cli.format,
        json => print_json_status(
            "ok",
            Some("Thank you for your feedback!"),
            &[
                ("page", serde_json::json!(page.as_str())),
                ("next", serde_json::json!([home.as_str(), explore.as_str()])),
            ],
        ),
        human => {
            println!("Thank you for your valuable feedback!");
            if !cli.quiet {
                println!();
                println!("Your suggestions help us improve and grow greener together.");
                println!("Return to `{}` or explore again from `{}`.", home, explore);
            }
        },
        records => {
            print_records_header(
                "feedback",
                &[("status", "ok".to_string()), ("page", page.to_string())],
            );
        }
    )
}
