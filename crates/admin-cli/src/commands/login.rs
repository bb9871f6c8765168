//! Login command implementation.
//!
//! Drives the login flow interactively: phone entry, OTP prompt with
//! `resend` support, retry on rejection. Every retry is an explicit
//! action; the command never re-submits on its own.

use std::io::{self, Write};

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use fixwell_core::{Error, FlowState, OtpChallenge, Session, SessionFlow};
use fixwell_http::HttpIdentityService;

use crate::context;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Phone number to sign in with (prompted when omitted)
    #[arg(long)]
    pub phone: Option<String>,

    /// Print server-issued development OTP codes (non-production only)
    #[arg(long)]
    pub dev_codes: bool,
}

pub async fn run(args: LoginArgs, api: &str) -> Result<()> {
    let base = context::api_base(api)?;
    let store = context::session_store()?;
    let identity = HttpIdentityService::new(base).with_debug_codes(args.dev_codes);

    let mut flow = SessionFlow::new(identity, store);

    // An operator with a valid session is not re-prompted.
    if let FlowState::Authenticated { session } = flow.state() {
        output::success("Already signed in");
        print_session(session);
        return Ok(());
    }

    let mut phone = args.phone;
    loop {
        let raw = match phone.take() {
            Some(value) => value,
            None => prompt("Phone number:")?,
        };

        eprintln!("{}", "Requesting code...".dimmed());
        match flow.submit_phone(&raw).await {
            Ok(challenge) => {
                announce_challenge(&challenge);
                break;
            }
            Err(err) => output::error(&flow_message(&err)),
        }
    }

    let session = loop {
        let raw = prompt("OTP (or 'resend'):")?;

        if raw.eq_ignore_ascii_case("resend") {
            match flow.resend().await {
                Ok(challenge) => {
                    output::success("Code re-sent");
                    announce_challenge(&challenge);
                }
                Err(err) => output::error(&flow_message(&err)),
            }
            continue;
        }

        eprintln!("{}", "Verifying...".dimmed());
        match flow.submit_code(&raw).await {
            Ok(session) => break session,
            Err(err) => output::error(&flow_message(&err)),
        }
    };

    output::success("Signed in successfully");
    print_session(&session);

    Ok(())
}

fn print_session(session: &Session) {
    output::field("Phone", session.identifier().as_str());
    if let Some(name) = session.display_name() {
        output::field("Name", name);
    }
}

fn announce_challenge(challenge: &OtpChallenge) {
    if let Some(seconds) = challenge.expires_in() {
        output::field("Code expires in", &format!("{}s", seconds));
    }
    if let Some(code) = challenge.debug_code() {
        output::field("Dev OTP", code);
    }
}

/// Identity-service declines carry the server's text verbatim; everything
/// else renders through its Display form.
fn flow_message(err: &Error) -> String {
    match err {
        Error::RemoteRejected(reject) => reject.message().to_string(),
        other => other.to_string(),
    }
}

fn prompt(label: &str) -> Result<String> {
    eprint!("{} ", label.dimmed());
    io::stderr().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        bail!("Aborted: end of input");
    }

    Ok(input.trim().to_string())
}
