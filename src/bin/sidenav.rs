use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};

use sidenav::logging::{init_logging, Verbosity};
use sidenav::web::HomePage;
use sidenav::{MenuConfig, NavMenu};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_HASH"),
    ", built ",
    env!("BUILD_TS"),
    ")"
);

/// Render side-panel navigation menus to HTML.
#[derive(Parser, Debug)]
#[command(name = "sidenav", version, long_version = LONG_VERSION, about)]
struct Cli {
    /// More output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Errors only
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a menu definition (or the built-in menu) to HTML
    Render {
        /// Menu definition (JSON). Uses the built-in menu if omitted.
        menu: Option<PathBuf>,

        /// Wrap the panel in a full HTML page
        #[arg(long)]
        page: bool,

        /// Page title (with --page)
        #[arg(long, default_value = "Menu")]
        title: String,

        /// Stylesheet linked from the page (with --page)
        #[arg(long)]
        stylesheet: Option<String>,

        /// Mark the link with this path as the current page
        #[arg(long)]
        current: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a menu definition
    Check {
        /// Menu definition (JSON)
        menu: PathBuf,
    },

    /// Print the built-in menu as a JSON definition
    Default,
}

fn load_menu(path: Option<&Path>) -> anyhow::Result<NavMenu> {
    match path {
        Some(path) => MenuConfig::load(path)?
            .menu()
            .with_context(|| format!("Invalid menu in {}", path.display())),
        None => Ok(NavMenu::default_routes()),
    }
}

fn write_output(output: Option<&Path>, html: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Error writing {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn render_html(
    menu: &NavMenu,
    page: bool,
    title: String,
    stylesheet: Option<String>,
    current: Option<&str>,
) -> anyhow::Result<String> {
    let view = match current {
        Some(current) => menu.render_at(current),
        None => menu.render(),
    };
    if !page {
        return Ok(view.to_html()?);
    }
    let mut home_page = HomePage::new(title, &view)?;
    if let Some(href) = stylesheet {
        home_page = home_page.with_stylesheet(href);
    }
    Ok(home_page.to_html()?)
}

fn default_json() -> anyhow::Result<String> {
    Ok(MenuConfig::from(&NavMenu::default_routes()).to_json()?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));
    log::debug!("{cli:?}");

    match cli.command {
        Command::Render {
            menu,
            page,
            title,
            stylesheet,
            current,
            output,
        } => {
            let menu = load_menu(menu.as_deref())?;
            let html = render_html(&menu, page, title, stylesheet, current.as_deref())?;
            write_output(output.as_deref(), &html)?;
        }
        Command::Check { menu } => {
            let menu = load_menu(Some(menu.as_path()))?;
            log::info!("Menu OK: {} entries", menu.len());
            println!("ok: {} entries", menu.len());
        }
        Command::Default => {
            println!("{}", default_json()?);
        }
    }
    Ok(())
}
