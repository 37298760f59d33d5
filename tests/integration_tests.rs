//! Integration tests for the resume analyser

use rand::rngs::StdRng;
use rand::SeedableRng;
use resume_analyser::config::{Config, OutputFormat};
use resume_analyser::input::InputManager;
use resume_analyser::llm::enhancer::{enhance_resume, HuggingFaceProvider};
use resume_analyser::output::formatter::{save_report_to_file, ReportGenerator};
use resume_analyser::output::pdf::save_text_as_pdf;
use resume_analyser::output::report::{AnalysisReport, ReportMetadata};
use resume_analyser::processing::analyzer::{text_preview, AnalysisEngine};
use resume_analyser::processing::checklist::ChecklistCategory;
use resume_analyser::processing::field::Track;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_analysis_with_job_description() {
    let manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();
    let engine = AnalysisEngine::new(&Config::default()).unwrap();

    let analysis = engine.analyze(&resume, Some(&job), &mut StdRng::seed_from_u64(2024));

    assert_eq!(analysis.contact.email, "john.doe@example.com");
    assert_eq!(analysis.contact.phone, "+1 (555) 123-4567");

    for skill in ["react", "node", "typescript", "next.js", "express", "docker", "aws", "linux"] {
        assert!(analysis.skills.contains(&skill.to_string()), "missing skill {}", skill);
    }
    let react = analysis.skills.iter().position(|s| s == "react").unwrap();
    let docker = analysis.skills.iter().position(|s| s == "docker").unwrap();
    assert!(react < docker);

    assert_eq!(analysis.checklist.score, 80);
    assert!(!analysis.checklist.is_present(ChecklistCategory::Declaration));

    let job_match = analysis.job_match.as_ref().unwrap();
    assert!(job_match.matched_keywords.contains("react"));
    assert!(job_match.matched_keywords.contains("typescript"));
    assert!(job_match.missing_keywords.contains("graphql"));
    let job_words = job_match.matched_keywords.len() + job_match.missing_keywords.len();
    assert_eq!(job_match.score as usize, job_match.matched_keywords.len() * 100 / job_words);

    assert_eq!(analysis.recommendation.track, Track::WebDevelopment);
    assert_eq!(analysis.recommendation.courses.len(), 5);
}

#[tokio::test]
async fn test_markdown_resume_checklist() {
    let manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.md")).await.unwrap();
    let engine = AnalysisEngine::new(&Config::default()).unwrap();

    let analysis = engine.analyze(&resume, None, &mut StdRng::seed_from_u64(1));

    assert_eq!(analysis.checklist.score, 60);
    assert!(analysis.checklist.is_present(ChecklistCategory::Declaration));
    assert!(analysis.job_match.is_none());
}

#[tokio::test]
async fn test_same_seed_gives_same_recommendations() {
    let resume = "Python developer with pandas and SQL";
    let engine = AnalysisEngine::new(&Config::default()).unwrap();

    let first = engine.analyze(resume, None, &mut StdRng::seed_from_u64(77));
    let second = engine.analyze(resume, None, &mut StdRng::seed_from_u64(77));

    assert_eq!(first.skills, second.skills);
    assert_eq!(first.checklist, second.checklist);
    assert_eq!(first.recommendation, second.recommendation);
}

#[tokio::test]
async fn test_degraded_enhancement_exports_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let pdf_path = dir.path().join("enhanced_resume.pdf");
    let provider = HuggingFaceProvider::new(&Config::default().enhancement, None).unwrap();

    let outcome = enhance_resume(&provider, "John Doe\nSoftware Engineer", "Web Development").await;
    save_text_as_pdf(outcome.text(), &pdf_path).unwrap();

    assert!(outcome.is_degraded());
    let bytes = std::fs::read(&pdf_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_report_saved_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("reports").join("john_analysis.json");
    let resume = "John Doe\nSummary: Kotlin and Android developer";
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let analysis = engine.analyze(resume, Some("android kotlin compose"), &mut StdRng::seed_from_u64(5));
    let report = AnalysisReport::new(
        ReportMetadata::new("john.txt", Some("inline".to_string())),
        text_preview(resume, 1500),
        analysis,
    );

    let content = ReportGenerator::with_options(false, false, 20)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    save_report_to_file(&content, &report_path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(value["analysis"]["recommendation"]["track"], "AndroidDevelopment");
    assert_eq!(value["analysis"]["job_match"]["score"], 66);
}
