//! Resume analyser: resume scoring, ATS matching and course recommendations

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use resume_analyser::cli::{self, Cli, Commands, ConfigAction};
use resume_analyser::config::Config;
use resume_analyser::input::InputManager;
use resume_analyser::llm::enhancer::{enhance_resume, EnhancementOutcome, HuggingFaceProvider};
use resume_analyser::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_analyser::output::pdf::save_text_as_pdf;
use resume_analyser::output::report::{AnalysisReport, ReportMetadata};
use resume_analyser::processing::analyzer::{text_preview, AnalysisEngine};
use resume_analyser::processing::field::Track;
use resume_analyser::{Result, ResumeAnalyserError};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
            recommendations,
            seed,
            enhance,
            export_pdf,
            no_color,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeAnalyserError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job) = &job {
                cli::validate_file_extension(job, &["txt", "md"])
                    .map_err(|e| ResumeAnalyserError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyserError::InvalidInput)?,
                None => config.output.format,
            };

            let input_manager = InputManager::new();

            let progress = spinner("Extracting text...");
            let resume_text = input_manager.extract_text(&resume).await;
            progress.finish_and_clear();
            let resume_text = resume_text?;
            info!("Resume text length: {} characters", resume_text.len());

            let (job_description, job_source) = match (job, job_text) {
                (Some(path), _) => {
                    let text = input_manager.extract_text(&path).await?;
                    (Some(text), Some(path.display().to_string()))
                }
                (None, Some(text)) => (Some(text), Some("inline".to_string())),
                (None, None) => (None, None),
            };

            let mut engine = AnalysisEngine::new(&config)?;
            if let Some(count) = recommendations {
                engine = engine.with_recommendation_count(count);
            }

            let analysis = match seed {
                Some(seed) => engine.analyze(&resume_text, job_description.as_deref(), &mut StdRng::seed_from_u64(seed)),
                None => engine.analyze(&resume_text, job_description.as_deref(), &mut rand::thread_rng()),
            };

            let mut report = AnalysisReport::new(
                ReportMetadata::new(resume.display().to_string(), job_source),
                text_preview(&resume_text, config.output.preview_chars),
                analysis,
            );

            if enhance || export_pdf.is_some() {
                let role = report.analysis.recommendation.track.label();
                let outcome = match HuggingFaceProvider::from_env(&config.enhancement) {
                    Ok(provider) => {
                        let progress = spinner("Enhancing your resume...");
                        let outcome = enhance_resume(&provider, &resume_text, role).await;
                        progress.finish_and_clear();
                        outcome
                    }
                    Err(e) => {
                        warn!("Enhancement provider unavailable, using fallback: {}", e);
                        EnhancementOutcome::fallback(&resume_text, e.to_string())
                    }
                };
                report = report.with_enhancement(outcome);
            }

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::with_options(
                use_colors,
                detailed || config.output.detailed,
                config.output.matched_keyword_limit,
            );
            let content = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &report.metadata.resume_file, true))
                    } else {
                        path
                    };
                    save_report_to_file(&content, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }

            // Export only after the report has been emitted
            if let (Some(pdf_path), Some(outcome)) = (&export_pdf, &report.enhancement) {
                save_text_as_pdf(outcome.text(), pdf_path)?;
                println!("📥 Enhanced resume written to {}", pdf_path.display());
            }
        }

        Commands::Skills => {
            println!("🧩 Skill Vocabulary ({} entries)\n", config.skills.vocabulary.len());
            for (i, skill) in config.skills.vocabulary.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, skill);
            }
        }

        Commands::Courses { track } => {
            let tracks = match track {
                Some(name) => vec![Track::from_name(&name).ok_or_else(|| {
                    ResumeAnalyserError::InvalidInput(format!(
                        "Unknown track: {}. Supported: data-science, web, android, ios, uiux",
                        name
                    ))
                })?],
                None => vec![
                    Track::DataScience,
                    Track::WebDevelopment,
                    Track::AndroidDevelopment,
                    Track::IosDevelopment,
                    Track::UiUxDesign,
                ],
            };

            for track in tracks {
                println!("🎯 {}", track);
                for (i, course) in config.courses.catalogs.catalog_for(track).iter().enumerate() {
                    println!("  {}. {} ({})", i + 1, course.name, course.url);
                }
                println!();
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("{}", config.to_toml()?);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset: {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_carries_message() {
        let progress = spinner("Extracting text...");
        assert_eq!(progress.message(), "Extracting text...");
        progress.finish_and_clear();
    }
}
