//! `bistro probe`: replay scroll offsets against an explicit layout.
//!
//! Prints one JSON object per line:
//!
//! ```text
//! {"event":"scroll","offset":750.0,"active":"about"}
//! {"event":"navigate","target":"gallery","outcome":"scrolled","top":3200.0,"behavior":"smooth","menu_open":false}
//! {"event":"settle","offset":3200.0,"active":"gallery"}
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::rc::Rc;

use crate::cli::ProbeArgs;
use crate::content::SectionId;
use crate::nav::{
    NavOutcome, PageSession, ScrollBehavior, ScrollEvents, SimulatedViewport, StaticLayout, Viewport,
};

/// One line of probe output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ProbeLine {
    Scroll {
        offset: f64,
        active: SectionId,
    },
    Navigate {
        target: String,
        #[serde(flatten)]
        outcome: NavOutcome,
        behavior: ScrollBehavior,
        menu_open: bool,
    },
    Settle {
        offset: f64,
        active: SectionId,
    },
}

/// Run the probe and write JSON lines to stdout.
pub fn run_probe(args: &ProbeArgs) -> Result<()> {
    let lines = probe(args)?;
    let mut stdout = io::stdout().lock();
    for line in &lines {
        let json = serde_json::to_string(line).context("failed to encode probe output")?;
        writeln!(stdout, "{json}")?;
    }
    Ok(())
}

/// Replay `args` through a mounted page session.
pub fn probe(args: &ProbeArgs) -> Result<Vec<ProbeLine>> {
    let layout = Rc::new(
        StaticLayout::parse(&args.layout)
            .with_context(|| format!("invalid --layout `{}`", args.layout))?,
    );
    let behavior = if args.instant {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    };

    let events = ScrollEvents::new();
    let mut viewport = SimulatedViewport::new(events.clone());
    let mut session = PageSession::new(args.lookahead, behavior);
    session.mount(&events, Rc::clone(&layout));

    let mut lines = Vec::with_capacity(args.offsets.len() + 2);
    for &offset in &args.offsets {
        viewport.user_scroll(offset);
        lines.push(ProbeLine::Scroll {
            offset: viewport.scroll_offset(),
            active: session.active(),
        });
    }

    if let Some(target) = &args.navigate {
        if args.menu_open {
            session.toggle_menu();
        }
        let outcome = session.navigate(target, &*layout, &mut viewport);
        lines.push(ProbeLine::Navigate {
            target: target.clone(),
            outcome,
            behavior,
            menu_open: session.menu().is_open(),
        });
        if viewport.settle() || (outcome.scrolled() && behavior == ScrollBehavior::Instant) {
            lines.push(ProbeLine::Settle {
                offset: viewport.scroll_offset(),
                active: session.active(),
            });
        }
    }

    session.unmount();
    Ok(lines)
}
