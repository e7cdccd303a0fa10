use crate::cli::{AddRowArgs, Cli, Commands, FieldsArgs, SubmitArgs};
use anyhow::{Context, Result, bail};
use bellows::dom::{Document, FormData, NodeId, Selector};
use bellows::handlers::RowAddHandler;
use bellows::rows::TemplateRow;
use bellows::transport::HttpTransport;
use bellows::{BellowsConfig, Outcome, Page, Section};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub async fn run(cli: Cli) -> Result<()> {
    let config = BellowsConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Commands::AddRow(args) => add_row(&config, args),
        Commands::Submit(args) => submit(config, args).await,
        Commands::Fields(args) => fields(&config, args),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn add_row(config: &BellowsConfig, args: AddRowArgs) -> Result<()> {
    let page = Arc::new(Page::new(load_page(&args.page)?));
    let target = page
        .read(|doc| doc.get_by_id(&args.target))
        .with_context(|| format!("No element #{} in page", args.target))?;

    let transport = Arc::new(HttpTransport::new(&config.http)?);
    let mut builder = Section::builder(Arc::clone(&page), config.section.clone(), transport);
    if args.template {
        let handler = RowAddHandler::new(&config.section);
        let (_, base) = page
            .read(|doc| handler.placeholder_base(doc, target))
            .with_context(|| {
                format!(
                    "#{} is not inside a .{} placeholder with an id ending in '{}'",
                    args.target, config.section.marker_class, config.section.empty_suffix
                )
            })?;
        let template = TemplateRow {
            hidden_class: config.section.hidden_class.clone(),
            ..TemplateRow::default()
        };
        builder = builder.row_template(base, Arc::new(template));
    }
    let section = builder.build()?;

    let dispatch = section.click(target)?;
    match &dispatch.outcome {
        Outcome::RowAdded { add_row: request, row, .. } => {
            eprintln!(
                "addrow -> #{} ({})",
                request.base,
                if row.is_some() { "row appended" } else { "no template applied" }
            );
        }
        Outcome::RowAddSkipped => eprintln!("placeholder id does not match, nothing to do"),
        _ => eprintln!("#{} is not a placeholder of #{}", args.target, config.section.root_id),
    }

    write_page(&page, args.out.as_ref())
}

async fn submit(mut config: BellowsConfig, args: SubmitArgs) -> Result<()> {
    if let Some(base_url) = args.base_url {
        config.http.base_url = base_url;
    }

    let page = Arc::new(Page::new(load_page(&args.page)?));
    let transport = Arc::new(HttpTransport::new(&config.http)?);
    let section = Section::builder(Arc::clone(&page), config.section.clone(), transport).build()?;
    let form = page.read(|doc| find_form(doc, section.root(), &config, args.form.as_deref()))?;

    let dispatch = section.submit(form).await?;
    if let Some(out) = &args.out {
        write_page(&page, Some(out))?;
    }

    match dispatch.outcome {
        Outcome::Saved { status } => {
            println!("✔ {} ({status})", config.section.success_message);
            Ok(())
        }
        Outcome::Invalid => bail!("Form is invalid, nothing was sent"),
        Outcome::Failed { message, .. } => bail!("Save failed: {message}"),
        other => bail!("Form was not submitted: {other:?}"),
    }
}

fn fields(config: &BellowsConfig, args: FieldsArgs) -> Result<()> {
    let doc = load_page(&args.page)?;
    let root = doc
        .get_by_id(&config.section.root_id)
        .with_context(|| format!("No #{} section in page", config.section.root_id))?;
    let form = find_form(&doc, root, config, args.form.as_deref())?;

    println!("{}", FormData::collect(&doc, form).to_urlencoded());
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_page(path: &Path) -> Result<Document> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Document::parse_html(&html)?)
}

fn find_form(
    doc: &Document,
    root: NodeId,
    config: &BellowsConfig,
    form_id: Option<&str>,
) -> Result<NodeId> {
    match form_id {
        Some(id) => doc
            .get_by_id(id)
            .with_context(|| format!("No form #{id} in page")),
        None => doc
            .query(root, &Selector::form_named(&config.section.form_name))
            .with_context(|| {
                format!(
                    "No form[name=\"{}\"] in #{}",
                    config.section.form_name, config.section.root_id
                )
            }),
    }
}

fn write_page(page: &Page, out: Option<&PathBuf>) -> Result<()> {
    let html = page.read(Document::render_page);
    match out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            println!("{html}");
            Ok(())
        }
    }
}
