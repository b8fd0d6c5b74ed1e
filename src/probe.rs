//! Probe controller.
//!
//! Drives fetch, interpret and print for a URL, then follows a redirect
//! target exactly once. The second result's own redirect is never followed.

use std::io::Write;

use log::info;

use crate::app::{parse_redirect_target, parse_url};
use crate::config::FOLLOWING_REDIRECT_MESSAGE;
use crate::error_handling::ProbeError;
use crate::fetch::{fetch, Dial, RequestTarget};
use crate::response::{interpret, ProbeResult};

/// Results of a probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Result for the requested URL
    pub initial: ProbeResult,
    /// Result for the redirect target, when one was followed
    pub redirected: Option<ProbeResult>,
}

/// Probes `url` and writes each result to `out`.
///
/// # Errors
///
/// Returns `ProbeError::Fetch` if either cycle fails to fetch, or
/// `ProbeError::Output` if writing to `out` fails.
///
/// # Example
///
/// ```no_run
/// use site_probe::{run_probe, Config, NetDialer};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dialer = NetDialer::new(&Config::default())?;
/// let report = run_probe(&dialer, "example.com", &mut std::io::stdout()).await?;
/// println!("cookies: {}", report.initial.cookies.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_probe<D, W>(dialer: &D, url: &str, out: &mut W) -> Result<ProbeReport, ProbeError>
where
    D: Dial,
    W: Write,
{
    let initial = probe_once(dialer, &parse_url(url), out).await?;

    let redirected = match initial.redirect_target.as_deref() {
        Some(location) => {
            info!("Following redirect from {} to {location}", initial.website);
            writeln!(out, "{FOLLOWING_REDIRECT_MESSAGE}").map_err(ProbeError::Output)?;
            Some(probe_once(dialer, &parse_redirect_target(location), out).await?)
        }
        None => None,
    };

    Ok(ProbeReport {
        initial,
        redirected,
    })
}

/// One probe cycle: fetch, interpret, print.
async fn probe_once<D, W>(
    dialer: &D,
    target: &RequestTarget,
    out: &mut W,
) -> Result<ProbeResult, ProbeError>
where
    D: Dial,
    W: Write,
{
    info!("Probing {target}");
    let raw = fetch(dialer, target).await?;
    let result = interpret(&raw, &target.host);

    write!(out, "{result}").map_err(ProbeError::Output)?;
    out.flush().map_err(ProbeError::Output)?;

    Ok(result)
}
