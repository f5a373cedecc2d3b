//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for managing the catalogue from a
//! terminal.
//!
//! ## Usage
//!
//! ```bash
//! # What a visitor sees on the public gallery
//! portfolio gallery --category wedding --sort oldest
//!
//! # Every project, drafts included, with reorder positions
//! portfolio list
//!
//! # Create a project from an image file
//! portfolio create --title "Harbour gala" --category events --image gala.jpg
//!
//! # Edit, publish, reorder, delete
//! portfolio update <id> --description "Bound in linen"
//! portfolio unpublish <id> <id>
//! portfolio reorder 5 0
//! portfolio delete <id> --yes
//!
//! # Recent admin actions
//! portfolio log
//!
//! # Work on a local sample catalogue instead of the hosted store
//! portfolio --offline list
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::gallery::{CategoryFilter, SortMode};
use portfolio_core::store::demo_documents;
use portfolio_core::{
    AdminService, AppConfig, Catalogue, Category, ContentStore, GalleryLoader, GalleryView,
    ImageUpload, MemoryStore, NewProject, PortfolioError, ProjectId, ProjectPatch, RedbKv,
    SanityStore,
};
use tracing::debug;

/// File holding the offline catalogue inside the data directory.
const OFFLINE_CATALOGUE: &str = "offline-catalogue.json";

/// Portfolio - manage a photography portfolio catalogue
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio - manage a photography portfolio catalogue")]
#[command(
    long_about = "Browse the public gallery and manage the project catalogue (create, edit, publish, reorder, delete) of a portfolio backed by a headless content store."
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: ~/.portfolio)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use a local sample catalogue instead of the hosted store
    #[arg(long, global = true)]
    offline: bool,

    /// Content store project id (overrides PORTFOLIO_PROJECT_ID)
    #[arg(long, global = true)]
    project_id: Option<String>,

    /// Content store dataset (overrides PORTFOLIO_DATASET)
    #[arg(long, global = true)]
    dataset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration
    Config,

    /// Show the public gallery as a visitor sees it
    Gallery {
        /// Category filter ("all" or a category name)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort mode: newest, oldest or category
        #[arg(short, long, default_value = "newest")]
        sort: String,

        /// Viewport width in pixels, which sets the page size
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Show every item instead of the first page
        #[arg(long)]
        all: bool,
    },

    /// List every project, drafts included
    List {
        /// Case-insensitive text search over title, category and description
        #[arg(short, long)]
        search: Option<String>,

        /// Leave drafts out
        #[arg(long)]
        hide_drafts: bool,
    },

    /// Show one project
    Show {
        /// Project ID
        id: String,
    },

    /// Create a published project
    Create {
        #[arg(short, long)]
        title: String,

        /// One of: wedding, portrait, commercial, retouch, album, events, photoshoots
        #[arg(short, long)]
        category: String,

        #[arg(short, long)]
        description: Option<String>,

        /// PNG, JPEG or WebP file
        #[arg(short, long)]
        image: PathBuf,
    },

    /// Change fields of a project
    Update {
        /// Project ID
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Replacement image file
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Explicit sort position
        #[arg(long)]
        order: Option<i64>,
    },

    /// Delete projects permanently
    Delete {
        /// Project IDs
        #[arg(required = true)]
        ids: Vec<String>,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Make projects visible on the public site
    Publish {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Hide projects from the public site
    Unpublish {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Move the project at one list position to another
    Reorder {
        /// Current position (as printed by `list`)
        from: usize,

        /// New position
        to: usize,

        /// Reorder only published projects
        #[arg(long)]
        hide_drafts: bool,
    },

    /// Show recent admin actions
    Log {
        /// Forget all recorded actions
        #[arg(long)]
        clear: bool,
    },
}

impl Commands {
    fn writes(&self) -> bool {
        matches!(
            self,
            Commands::Create { .. }
                | Commands::Update { .. }
                | Commands::Delete { .. }
                | Commands::Publish { .. }
                | Commands::Unpublish { .. }
                | Commands::Reorder { .. }
        )
    }
}

/// Get the default data directory (~/.portfolio)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".portfolio")
}

fn parse_category(raw: &str) -> Result<Category> {
    let category = Category::parse(raw);
    if !Category::ASSIGNABLE.contains(&category) {
        let names: Vec<&str> = Category::ASSIGNABLE.iter().map(|c| c.as_str()).collect();
        anyhow::bail!("Unknown category '{}'. Use one of: {}", raw, names.join(", "));
    }
    Ok(category)
}

fn read_image(path: &Path) -> Result<ImageUpload> {
    ImageUpload::from_path(path).with_context(|| format!("Cannot use {}", path.display()))
}

/// The store plus, in offline mode, where to save it afterwards.
struct Backend {
    store: Arc<dyn ContentStore>,
    offline: Option<(Arc<MemoryStore>, PathBuf)>,
}

impl Backend {
    fn open(config: &AppConfig, offline: bool) -> Result<Self> {
        if offline {
            let path = config.data_dir.join(OFFLINE_CATALOGUE);
            let memory = Arc::new(MemoryStore::load_json(&path, demo_documents)?);
            let store: Arc<dyn ContentStore> = memory.clone();
            return Ok(Self {
                store,
                offline: Some((memory, path)),
            });
        }
        Ok(Self {
            store: Arc::new(SanityStore::new(config.store.clone())?),
            offline: None,
        })
    }

    fn save(&self) -> Result<()> {
        if let Some((memory, path)) = &self.offline {
            memory.save_json(path)?;
            debug!(path = %path.display(), "Offline catalogue saved");
        }
        Ok(())
    }
}

fn print_catalogue(catalogue: &Catalogue) {
    let visible = catalogue.visible();
    if visible.is_empty() {
        println!("No projects found.");
        return;
    }

    println!(
        "Projects ({}, {} draft):",
        catalogue.len(),
        catalogue.draft_count()
    );
    println!();
    let positions = catalogue.reorderable();
    for item in visible {
        let position = positions
            .iter()
            .position(|p| p.id == item.id)
            .map(|p| p.to_string())
            .unwrap_or_default();
        let draft = if item.published { "" } else { "  [draft]" };
        println!(
            "  {:>3}  {}  {:<12} {}  {}{}",
            position,
            item.id,
            item.category.as_str(),
            item.title,
            item.created_label(),
            draft
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    portfolio_core::logging::init(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let mut config = AppConfig::from_env(data_dir);
    if let Some(project_id) = cli.project_id {
        config.store.project_id = project_id;
    }
    if let Some(dataset) = cli.dataset {
        config.store.dataset = dataset;
    }

    if cli.command.writes() && !cli.offline && !config.store.is_admin_configured() {
        return Err(PortfolioError::NotConfigured.into());
    }

    let backend = Backend::open(&config, cli.offline)?;
    let kv = Arc::new(RedbKv::open(config.local_db_path())?);
    let admin = AdminService::new(backend.store.clone(), config.store.image_urls(), kv);
    let mut catalogue = Catalogue::new();

    match cli.command {
        Commands::Config => {
            let store = &config.store;
            println!("Portfolio v0.1.0");
            println!();
            println!("Store:");
            if cli.offline {
                println!("  Mode: offline ({})", config.data_dir.join(OFFLINE_CATALOGUE).display());
            } else {
                println!("  Project: {}", store.project_id);
                println!("  Dataset: {}", store.dataset);
                println!("  API version: {}", store.api_version);
                println!("  Reads: {}", store.api_base(false));
            }
            println!(
                "  Admin writes: {}",
                if cli.offline || store.is_admin_configured() {
                    "enabled"
                } else {
                    "not configured"
                }
            );
            println!();
            println!("Data directory: {}", config.data_dir.display());
        }

        Commands::Gallery {
            category,
            sort,
            width,
            all,
        } => {
            let loader = GalleryLoader::new(backend.store.clone(), config.store.image_urls());
            let items = loader.load().await?.items;

            let mut view = GalleryView::new();
            view.set_viewport_width(width);
            view.set_category(CategoryFilter::parse(&category));
            view.set_sort(SortMode::parse(&sort));
            if all {
                view.toggle_expanded();
            }

            let filters: Vec<String> = portfolio_core::gallery::visible_categories(&items)
                .into_iter()
                .map(|(filter, count)| format!("{} ({})", filter.label(), count))
                .collect();
            println!("Filters: {}", filters.join(" · "));

            let page = view.page(&items);
            if page.items.is_empty() {
                println!("Nothing in {} yet.", view.active().label());
            } else {
                println!("Showing {} of {} ({})", page.items.len(), page.total, view.sort().label());
                println!();
                for item in &page.items {
                    println!("  {} [{}] {}", item.id, item.category, item.title);
                }
            }
            if let Some(label) = view.show_more_label(&items) {
                println!();
                println!("{}", label);
            }
        }

        Commands::List {
            search,
            hide_drafts,
        } => {
            admin.load(&mut catalogue).await?;
            catalogue.set_show_drafts(!hide_drafts);
            if let Some(text) = search {
                catalogue.set_search(text);
            }
            print_catalogue(&catalogue);
        }

        Commands::Show { id } => {
            let item = admin.get(&ProjectId::new(id)).await?;
            println!("Project: {}", item.title);
            println!("  ID: {}", item.id);
            println!("  Category: {}", item.category.label());
            if let Some(description) = &item.description {
                println!("  Description: {}", description);
            }
            println!("  Published: {}", if item.published { "Yes" } else { "No" });
            match item.order {
                Some(order) => println!("  Order: {}", order),
                None => println!("  Order: (unset)"),
            }
            println!("  Created: {}", item.created_label());
            println!("  Image: {}", item.image);
            println!("  Thumbnail: {}", item.renditions.thumbnail);
            println!("  Full: {}", item.renditions.full);
        }

        Commands::Create {
            title,
            category,
            description,
            image,
        } => {
            let project = NewProject {
                title: title.clone(),
                category: parse_category(&category)?,
                description,
                image: read_image(&image)?,
            };
            let id = admin.create(&mut catalogue, project).await?;
            backend.save()?;
            println!("Created project: {}", title.trim());
            println!("  ID: {}", id);
        }

        Commands::Update {
            id,
            title,
            category,
            description,
            image,
            order,
        } => {
            let patch = ProjectPatch {
                title,
                category: category.as_deref().map(parse_category).transpose()?,
                description,
                image: image.as_deref().map(read_image).transpose()?,
                published: None,
                order,
            };
            if patch.is_empty() {
                anyhow::bail!("Nothing to update. Pass at least one field to change.");
            }
            let id = ProjectId::new(id);
            admin.load(&mut catalogue).await?;
            admin.update(&mut catalogue, &id, patch).await?;
            backend.save()?;
            println!("Updated project: {}", catalogue.title_of(&id));
        }

        Commands::Delete { ids, yes } => {
            if !yes {
                println!(
                    "This permanently deletes {} project(s) and cannot be undone.",
                    ids.len()
                );
                println!("To confirm, run again with --yes");
                return Ok(());
            }

            admin.load(&mut catalogue).await?;
            if let [single] = ids.as_slice() {
                catalogue.confirm.request(ProjectId::new(single.as_str()));
                admin.delete_confirmed(&mut catalogue).await?;
            } else {
                for id in &ids {
                    catalogue.selection.toggle(&ProjectId::new(id.as_str()));
                }
                admin.bulk_delete(&mut catalogue).await?;
            }
            backend.save()?;
            println!("Deleted {} project(s).", ids.len());
        }

        Commands::Publish { ids } => {
            set_published(&admin, &mut catalogue, &ids, true).await?;
            backend.save()?;
            println!("Published {} project(s).", ids.len());
        }

        Commands::Unpublish { ids } => {
            set_published(&admin, &mut catalogue, &ids, false).await?;
            backend.save()?;
            println!("Unpublished {} project(s).", ids.len());
        }

        Commands::Reorder {
            from,
            to,
            hide_drafts,
        } => {
            admin.load(&mut catalogue).await?;
            catalogue.set_show_drafts(!hide_drafts);
            admin.apply_reorder(&mut catalogue, from, to).await?;
            backend.save()?;
            println!("Moved position {} to {}.", from, to);
            println!();
            print_catalogue(&catalogue);
        }

        Commands::Log { clear } => {
            if clear {
                admin.clear_activity()?;
                println!("Activity log cleared.");
            } else {
                let entries = admin.activity();
                if entries.is_empty() {
                    println!("No recorded activity.");
                } else {
                    println!("Recent activity ({}):", entries.len());
                    println!();
                    for entry in entries {
                        println!(
                            "  {}  {}",
                            entry.at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"),
                            entry.message
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

async fn set_published<K: portfolio_core::KeyValueStore>(
    admin: &AdminService<dyn ContentStore, K>,
    catalogue: &mut Catalogue,
    ids: &[String],
    published: bool,
) -> Result<()> {
    admin.load(catalogue).await?;
    for id in ids {
        catalogue.selection.toggle(&ProjectId::new(id.as_str()));
    }
    admin.bulk_set_published(catalogue, published).await?;
    Ok(())
}
