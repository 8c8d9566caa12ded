//! Interactive petition wizard CLI.
//!
//! Drives one client's EB-2 NIW petition workflow against the petition
//! backend: background entry with optional CV autofill, endeavor and
//! argument selection, cover letter review and revision, and reference
//! letter generation.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use petition_builder::adapters::auth::StaticTokenSession;
use petition_builder::adapters::http::{
    ApiClient, ApiClientConfig, HttpCvExtractor, HttpDocumentStore, HttpGenerationService,
};
use petition_builder::application::{WizardController, WizardError};
use petition_builder::config::AppConfig;
use petition_builder::domain::foundation::ClientId;
use petition_builder::domain::petition::{RecommenderField, WizardStep, ADVISED_ARGUMENTS, ADVISED_ENDEAVORS};
use petition_builder::ports::{DocumentKind, DocumentUpload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.runtime.log_level.clone()));
    if config.runtime.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    info!("Starting petition builder v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let client_name = args.next().unwrap_or_else(|| "Applicant".to_string());
    let client_id = match args.next() {
        Some(raw) => raw.parse::<ClientId>()?,
        None => ClientId::new(),
    };
    info!(client_id = %client_id, client_name = %client_name, "session started");

    let auth = Arc::new(StaticTokenSession::new(config.auth.api_token())?);
    let api = ApiClient::new(
        ApiClientConfig::new(config.api.base_url.clone()).with_timeout(config.api.timeout()),
        auth,
    )?;

    let mut controller = WizardController::new(
        client_id,
        client_name,
        Arc::new(HttpDocumentStore::new(api.clone())),
        Arc::new(HttpCvExtractor::new(api.clone())),
        Arc::new(HttpGenerationService::new(api)),
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let step = controller.workflow().step();
        println!("\n=== Step {} of 5: {} ===", step.number(), step.label());
        print_menu(step);

        let Some(line) = read_line(&mut lines)? else {
            break;
        };
        let command = line.trim();
        if command == "quit" {
            break;
        }

        if let Err(e) = dispatch(&mut controller, command, &mut lines).await {
            // WizardError display strings are written for end users.
            println!("! {}", e);
        }
    }

    Ok(())
}

fn print_menu(step: WizardStep) {
    match step {
        WizardStep::Background => {
            println!("  cv <path>      - upload your CV and autofill the fields");
            println!("  evidence <path> - upload a supporting document");
            println!("  edit           - enter background fields manually");
            println!("  submit         - submit background and get suggestions");
        }
        WizardStep::EndeavorSelection => {
            println!("  e <n> / a <n>  - toggle endeavor / argument n");
            println!("  generate       - generate the cover letter");
            println!("  back           - return to background");
        }
        WizardStep::CoverLetterReview => {
            println!("  show           - print the current draft");
            println!("  revise <text>  - revise the draft with feedback");
            println!("  approve        - approve and collect references");
            println!("  back           - return to selection");
        }
        WizardStep::ReferenceCollection => {
            println!("  add            - add a recommender slot");
            println!("  set <n> <field> <value> - set name/position/institution/relationship/focus");
            println!("  generate       - generate all reference letters");
            println!("  back           - return to the cover letter");
        }
        WizardStep::Complete => {
            println!("  letters        - print the generated letters");
            println!("  restart        - start a new petition");
        }
    }
    println!("  quit");
    print!("> ");
    let _ = io::stdout().flush();
}

async fn dispatch(
    controller: &mut WizardController,
    command: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), WizardError> {
    let (verb, rest) = match command.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (command, ""),
    };

    match (controller.workflow().step(), verb) {
        (WizardStep::Background, "cv") => {
            let document = load_document(rest)?;
            controller.autofill_from_cv(document).await?;
            print_background(controller);
        }
        (WizardStep::Background, "evidence") => {
            let document = load_document(rest)?;
            let ack = controller
                .upload_document(DocumentKind::Evidence, document)
                .await?;
            println!("Uploaded as {}", ack.document_id);
        }
        (WizardStep::Background, "edit") => {
            edit_background(controller, lines)?;
        }
        (WizardStep::Background, "submit") => {
            controller.submit_background().await?;
            print_suggestions(controller);
        }
        (WizardStep::EndeavorSelection, "e") | (WizardStep::EndeavorSelection, "a") => {
            let index: usize = rest
                .parse()
                .map_err(|_| invalid_input("expected an option number"))?;
            // Options are shown 1-based.
            let index = index.saturating_sub(1);
            if verb == "e" {
                controller.toggle_endeavor(index)?;
            } else {
                controller.toggle_argument(index)?;
            }
            print_suggestions(controller);
        }
        (WizardStep::EndeavorSelection, "generate") => {
            println!("Generating cover letter...");
            controller.generate_cover_letter().await?;
            print_draft(controller);
        }
        (WizardStep::CoverLetterReview, "show") => {
            print_draft(controller);
        }
        (WizardStep::CoverLetterReview, "revise") => {
            println!("Revising cover letter...");
            controller.revise_cover_letter(rest).await?;
            print_draft(controller);
        }
        (WizardStep::CoverLetterReview, "approve") => {
            controller.approve_cover_letter()?;
        }
        (WizardStep::ReferenceCollection, "add") => {
            let index = controller.add_recommender()?;
            println!("Added recommender slot {}", index + 1);
        }
        (WizardStep::ReferenceCollection, "set") => {
            set_recommender(controller, rest)?;
        }
        (WizardStep::ReferenceCollection, "generate") => {
            println!("Generating reference letters...");
            let count = controller.generate_reference_letters().await?;
            println!("Generated {} reference letter(s).", count);
        }
        (WizardStep::Complete, "letters") => {
            for letter in controller.workflow().reference_letters() {
                println!("\n--- Reference letter: {} ---", letter.recommender_name);
                println!("{}", letter.text);
            }
        }
        (WizardStep::Complete, "restart") => {
            controller.restart()?;
        }
        (_, "back") => {
            controller.go_back()?;
        }
        _ => println!("Unknown command for this step."),
    }

    Ok(())
}

fn load_document(path: &str) -> Result<DocumentUpload, WizardError> {
    if path.is_empty() {
        return Err(invalid_input("expected a file path"));
    }
    let bytes = std::fs::read(path)
        .map_err(|e| invalid_input(format!("could not read {}: {}", path, e)))?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let content_type = match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    };
    Ok(DocumentUpload {
        file_name,
        content_type: content_type.to_string(),
        bytes,
    })
}

fn edit_background(
    controller: &mut WizardController,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), WizardError> {
    // Blank input keeps the current value.
    let fields: [(&str, fn(&mut petition_builder::domain::petition::ProfessionalBackground, String)); 7] = [
        ("Field of expertise", |bg, v| bg.field = v),
        ("Highest degree", |bg, v| bg.degree = v),
        ("Years of experience", |bg, v| {
            bg.experience_years = v.parse().ok()
        }),
        ("Key achievements", |bg, v| bg.achievements = v),
        ("Publications count", |bg, v| {
            bg.publications_count = v.parse().ok()
        }),
        ("Current position", |bg, v| bg.current_position = v),
        ("Research focus", |bg, v| bg.research_focus = v),
    ];

    for (label, apply) in fields {
        print!("{}: ", label);
        let _ = io::stdout().flush();
        let Some(value) = read_line(lines).map_err(|e| invalid_input(e.to_string()))? else {
            break;
        };
        let value = value.trim().to_string();
        if !value.is_empty() {
            apply(controller.background_mut()?, value);
        }
    }
    Ok(())
}

fn set_recommender(controller: &mut WizardController, rest: &str) -> Result<(), WizardError> {
    let mut parts = rest.splitn(3, ' ');
    let index: usize = parts
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(|| invalid_input("expected a recommender number"))?
        .saturating_sub(1);
    let field = match parts.next() {
        Some("name") => RecommenderField::Name,
        Some("position") => RecommenderField::Position,
        Some("institution") => RecommenderField::Institution,
        Some("relationship") => RecommenderField::Relationship,
        Some("focus") => RecommenderField::Focus,
        _ => return Err(invalid_input("unknown field")),
    };
    let value = parts.next().unwrap_or("").to_string();
    controller.update_recommender(index, field, value)?;
    Ok(())
}

fn print_background(controller: &WizardController) {
    let bg = controller.workflow().background();
    println!("Name: {}", bg.full_name);
    println!("Field: {}", bg.field);
    println!("Degree: {}", bg.degree);
    println!("Position: {}", bg.current_position);
    println!("Research focus: {}", bg.research_focus);
}

fn print_suggestions(controller: &WizardController) {
    let Some(suggestions) = controller.workflow().suggestions() else {
        return;
    };
    println!(
        "\nProposed endeavors (choose {}-{}):",
        ADVISED_ENDEAVORS.start(),
        ADVISED_ENDEAVORS.end()
    );
    for (i, option) in suggestions.endeavor_options().iter().enumerate() {
        let mark = if suggestions.is_endeavor_selected(i) { "x" } else { " " };
        println!("  [{}] {}. {}", mark, i + 1, option);
    }
    println!(
        "\nNational interest arguments (choose {}-{}):",
        ADVISED_ARGUMENTS.start(),
        ADVISED_ARGUMENTS.end()
    );
    for (i, option) in suggestions.argument_options().iter().enumerate() {
        let mark = if suggestions.is_argument_selected(i) { "x" } else { " " };
        println!("  [{}] {}. {}", mark, i + 1, option);
    }
}

fn print_draft(controller: &WizardController) {
    if let Some(letter) = controller.workflow().cover_letter() {
        println!("\n--- Cover letter draft ---\n{}", letter.text());
    }
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn invalid_input(message: impl Into<String>) -> WizardError {
    WizardError::Validation(
        petition_builder::domain::foundation::DomainError::validation("input", message),
    )
}
