use std::io::Write;

use anyhow::Context;
use clap::{ArgAction, Parser};
use vellum_engine::document::SvgDocument;
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::scene::{Circle, Rectangle};

#[derive(Parser, Debug)]
#[command(name = "vellum-studio")]
#[command(version, about = "Render the demo shape document as HTML")]
struct Cli {
    /// Print the bare <svg> element instead of a full HTML page
    #[arg(long, action = ArgAction::SetTrue)]
    svg: bool,

    /// Log render details to stderr
    #[arg(long, short = 'v', action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::for_verbosity(cli.verbose));

    let document = demo_document();
    let markup = if cli.svg {
        document.render_svg()
    } else {
        document.render()
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{markup}").context("failed to write markup to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    log::debug!("wrote {} bytes of markup", markup.len() + 1);
    Ok(())
}

/// Teal rectangle behind a yellow circle.
fn demo_document() -> SvgDocument {
    let mut document = SvgDocument::new();
    document.append(Rectangle::default());
    document.append(Circle::default());
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["vellum-studio", "--svg", "-v"]).unwrap();
        assert!(cli.svg);
        assert!(cli.verbose);
    }

    #[test]
    fn flags_default_off() {
        let cli = Cli::try_parse_from(["vellum-studio"]).unwrap();
        assert!(!cli.svg);
        assert!(!cli.verbose);
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = Cli::try_parse_from(["vellum-studio", "--png"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_recognized() {
        let help = Cli::try_parse_from(["vellum-studio", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        let version = Cli::try_parse_from(["vellum-studio", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn demo_draws_rectangle_before_circle() {
        let svg = demo_document().render_svg();
        assert!(svg.find("<rect").unwrap() < svg.find("<circle").unwrap());
    }
}
