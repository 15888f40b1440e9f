use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use mediasite::content::{HeroSlide, MenuItem, PortfolioVideo, PricingPlan};
use mediasite::editor::{ContactField, MenuItemField, PlanField, SlideField, VideoField};
use mediasite::{Provider, Site, SiteConfig};

#[derive(Parser)]
#[command(name = "mediasite")]
#[command(about = "Edit, render and track the media-production site")]
struct Cli {
    /// JSON file backing the site store
    #[arg(long, value_name = "PATH", default_value = "mediasite-store.json")]
    store: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Unlock the dashboard
    Login { password: String },
    /// Lock the dashboard
    Logout,
    /// Change the dashboard password
    Passwd { new_password: String },
    /// Show or reset the whole content object
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Set the navigation logo text
    Logo { logo: String },
    /// Navigation menu items
    Menu {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Hero slides
    Slide {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Portfolio videos
    Video {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Pricing plans
    Plan {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Set a section's title and highlighted title
    Titles {
        #[arg(value_enum)]
        section: TitledSection,
        title: String,
        highlight: String,
    },
    /// Set one contact field (whatsapp, instagram, tiktok, facebook, googleMaps)
    Contact { field: String, value: String },
    /// Tracking pixels
    Tracking {
        #[command(subcommand)]
        action: TrackingAction,
    },
    /// Write a tracking settings backup into DIR
    Export {
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
    /// Restore tracking settings from a backup file
    Import { file: PathBuf },
    /// Render a page template with the stored content and tracking code
    Render {
        template: PathBuf,
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    Show,
    /// Restore the stock content
    Reset,
}

#[derive(Subcommand)]
enum ListAction {
    List,
    /// Append an element with default values
    Add,
    /// Set one field of the element at INDEX
    Update {
        index: usize,
        field: String,
        value: String,
    },
    Remove { index: usize },
}

#[derive(Clone, Copy, ValueEnum)]
enum TitledSection {
    Portfolio,
    Pricing,
}

#[derive(Subcommand)]
enum TrackingAction {
    /// Show each provider's id and status
    Show,
    /// Validate and save ids; providers not named keep their current values
    Save {
        #[arg(long, value_name = "ID")]
        facebook: Option<String>,
        #[arg(long, value_name = "ID")]
        google_analytics: Option<String>,
        #[arg(long, value_name = "ID")]
        google_tag_manager: Option<String>,
        /// Providers to enable
        #[arg(long, value_name = "PROVIDER")]
        enable: Vec<String>,
        /// Providers to disable
        #[arg(long, value_name = "PROVIDER")]
        disable: Vec<String>,
    },
    Enable { provider: String },
    Disable { provider: String },
    /// Print the code that will be injected into the page
    Preview,
}

/// Route `log` records from the library through a tracing subscriber on
/// stderr. `--verbose` lowers the threshold from warn to debug.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_list<T>(items: &[T], describe: impl Fn(&T) -> String) {
    if items.is_empty() {
        println!("(empty)");
    }
    for (index, item) in items.iter().enumerate() {
        println!("{:>3}  {}", index, describe(item));
    }
}

fn describe_menu_item(item: &MenuItem) -> String {
    let kind = if item.is_button { " [button]" } else { "" };
    format!("{} -> {}{}", item.text, item.href, kind)
}

fn describe_slide(slide: &HeroSlide) -> String {
    format!(
        "[{}] {} {} ({})",
        slide.kind.as_str(),
        slide.title,
        slide.title_highlight,
        slide.background
    )
}

fn describe_video(video: &PortfolioVideo) -> String {
    format!("{} ({})", video.title, video.video_url)
}

fn describe_plan(plan: &PricingPlan) -> String {
    let featured = if plan.featured { " [featured]" } else { "" };
    format!(
        "{} {} {}, {} features{}",
        plan.name,
        plan.price,
        plan.payment_type,
        plan.features.len(),
        featured
    )
}

#[derive(Clone, Copy)]
enum ListSection {
    Menu,
    Slide,
    Video,
    Plan,
}

fn run_list(site: &Site, section: ListSection, action: ListAction) -> anyhow::Result<()> {
    let editor = site.editor();
    match section {
        ListSection::Menu => {
            let items = match action {
                ListAction::List => editor.load().navigation.menu_items,
                ListAction::Add => editor.add_menu_item()?,
                ListAction::Update { index, field, value } => {
                    editor.update_menu_item(index, MenuItemField::parse(&field, &value)?)?
                }
                ListAction::Remove { index } => editor.remove_menu_item(index)?,
            };
            print_list(&items, describe_menu_item);
        }
        ListSection::Slide => {
            let slides = match action {
                ListAction::List => editor.load().hero.slides,
                ListAction::Add => editor.add_hero_slide()?,
                ListAction::Update { index, field, value } => {
                    editor.update_hero_slide(index, SlideField::parse(&field, &value)?)?
                }
                ListAction::Remove { index } => editor.remove_hero_slide(index)?,
            };
            print_list(&slides, describe_slide);
        }
        ListSection::Video => {
            let videos = match action {
                ListAction::List => editor.load().portfolio.videos,
                ListAction::Add => editor.add_portfolio_video()?,
                ListAction::Update { index, field, value } => {
                    editor.update_portfolio_video(index, VideoField::parse(&field, &value)?)?
                }
                ListAction::Remove { index } => editor.remove_portfolio_video(index)?,
            };
            print_list(&videos, describe_video);
        }
        ListSection::Plan => {
            let plans = match action {
                ListAction::List => editor.load().pricing.plans,
                ListAction::Add => editor.add_pricing_plan()?,
                ListAction::Update { index, field, value } => {
                    editor.update_pricing_plan(index, PlanField::parse(&field, &value)?)?
                }
                ListAction::Remove { index } => editor.remove_pricing_plan(index)?,
            };
            print_list(&plans, describe_plan);
        }
    }
    Ok(())
}

fn run_tracking(site: &Site, action: TrackingAction) -> anyhow::Result<()> {
    let tracking = site.tracking();
    match action {
        TrackingAction::Show => {
            let settings = tracking.load_settings();
            for provider in Provider::ALL {
                let entry = settings.get(provider);
                let id = if entry.id.is_empty() { "-" } else { entry.id.as_str() };
                println!("{:<20} {:<18} {}", provider.to_string(), id, tracking.status(provider));
            }
        }
        TrackingAction::Save {
            facebook,
            google_analytics,
            google_tag_manager,
            enable,
            disable,
        } => {
            let mut form = tracking.load_settings();
            let ids = [
                (Provider::FacebookPixel, facebook),
                (Provider::GoogleAnalytics, google_analytics),
                (Provider::GoogleTagManager, google_tag_manager),
            ];
            for (provider, id) in ids {
                if let Some(id) = id {
                    form.get_mut(provider).id = id;
                }
            }
            for name in &enable {
                form.get_mut(name.parse()?).enabled = true;
            }
            for name in &disable {
                form.get_mut(name.parse()?).enabled = false;
            }
            tracking.save_settings(form)?;
            println!("Tracking settings saved; snippets apply on the next render.");
        }
        TrackingAction::Enable { provider } => {
            let provider: Provider = provider.parse()?;
            let status = tracking.set_enabled(provider, true)?;
            println!("{}: {}", provider, status);
        }
        TrackingAction::Disable { provider } => {
            let provider: Provider = provider.parse()?;
            let status = tracking.set_enabled(provider, false)?;
            println!("{}: {}", provider, status);
        }
        TrackingAction::Preview => match tracking.preview() {
            Some(code) => println!("{}", code),
            None => println!("No tracking pixels are configured."),
        },
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config = SiteConfig {
        store_path: args.store.clone(),
        ..Default::default()
    };
    let site = Site::open(config).context("Failed to open site store")?;
    let auth = site.auth();

    match &args.command {
        Command::Login { password } => {
            auth.login(password)?;
            println!("Dashboard unlocked.");
            return Ok(());
        }
        Command::Logout => {
            if !auth.logout() {
                bail!("Failed to lock the dashboard");
            }
            println!("Dashboard locked.");
            return Ok(());
        }
        Command::Render { template, output } => {
            let template = fs::read_to_string(template)
                .with_context(|| format!("Failed to read template {}", template.display()))?;
            let html = site.render_page(&template);
            match output {
                Some(path) => fs::write(path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{}", html),
            }
            return Ok(());
        }
        _ => {}
    }

    auth.require()?;
    let editor = site.editor();

    match args.command {
        Command::Passwd { new_password } => {
            auth.change_password(&new_password)?;
            println!("Password updated.");
        }
        Command::Content { action } => match action {
            ContentAction::Show => {
                println!("{}", serde_json::to_string_pretty(&editor.load())?);
            }
            ContentAction::Reset => {
                editor.reset_to_defaults()?;
                println!("Content restored to defaults.");
            }
        },
        Command::Logo { logo } => {
            editor.set_logo(&logo)?;
            println!("Logo saved.");
        }
        Command::Titles {
            section,
            title,
            highlight,
        } => {
            match section {
                TitledSection::Portfolio => editor.set_portfolio_titles(&title, &highlight)?,
                TitledSection::Pricing => editor.set_pricing_titles(&title, &highlight)?,
            }
            println!("Titles saved.");
        }
        Command::Contact { field, value } => {
            editor.update_contact(ContactField::parse(&field, &value)?)?;
            println!("Contact saved.");
        }
        Command::Tracking { action } => run_tracking(&site, action)?,
        Command::Export { dir } => {
            let path = site.backup().export_to_dir(&dir, Utc::now())?;
            println!("Exported {}", path.display());
        }
        Command::Import { file } => {
            site.backup()
                .import_file(&file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            println!("Tracking settings imported.");
        }
        Command::Menu { action } => run_list(&site, ListSection::Menu, action)?,
        Command::Slide { action } => run_list(&site, ListSection::Slide, action)?,
        Command::Video { action } => run_list(&site, ListSection::Video, action)?,
        Command::Plan { action } => run_list(&site, ListSection::Plan, action)?,
        Command::Login { .. } | Command::Logout | Command::Render { .. } => {
            unreachable!("handled before the login check")
        }
    }

    Ok(())
}
