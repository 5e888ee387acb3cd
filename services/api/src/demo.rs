use crate::infra::InMemoryHistorySink;
use admissions::config::AppConfig;
use admissions::error::AppError;
use admissions::workflows::admission::intake::ACTIVITY_FIELDS;
use admissions::workflows::admission::report::history_log;
use admissions::workflows::admission::{
    AdmissionService, DecisionReport, FormFields, Stage, StageEvaluator, StudentInfo, Submission,
};
use chrono::Local;
use clap::{Args, ValueEnum};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoActivity {
    Sports,
    Certificate,
    Volunteer,
}

impl DemoActivity {
    fn field(self) -> &'static str {
        match self {
            DemoActivity::Sports => ACTIVITY_FIELDS[0].0,
            DemoActivity::Certificate => ACTIVITY_FIELDS[1].0,
            DemoActivity::Volunteer => ACTIVITY_FIELDS[2].0,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Applicant name shown on the decision report
    #[arg(long, default_value = "Demo Applicant")]
    pub(crate) name: String,
    /// Registration number shown on the decision report
    #[arg(long, default_value = "REG-0001")]
    pub(crate) registration_number: String,
    /// Program applied for
    #[arg(long, default_value = "BS Computer Science")]
    pub(crate) program: String,
    /// Leave the document verification box unchecked
    #[arg(long)]
    pub(crate) documents_unverified: bool,
    /// Second-year marks (out of 1100)
    #[arg(long, default_value = "750")]
    pub(crate) marks_2nd_year: String,
    /// Admission test marks (out of 100)
    #[arg(long, default_value = "70")]
    pub(crate) marks_admission_test: String,
    /// Extracurricular activity to tick; repeat for several
    #[arg(long = "activity", value_enum, default_value = "sports")]
    pub(crate) activities: Vec<DemoActivity>,
    /// Tick no extracurricular activities at all
    #[arg(long)]
    pub(crate) no_activities: bool,
    /// Interview score percentage (0-100)
    #[arg(long, default_value = "75")]
    pub(crate) interview_percentage: String,
    /// Print the decision report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

fn stage_form(stage: Stage, args: &DemoArgs) -> FormFields {
    let mut fields = FormFields::new();
    match stage {
        Stage::DocumentCheck => {
            if !args.documents_unverified {
                fields.insert("documentsVerified".to_string(), "on".to_string());
            }
        }
        Stage::AcademicEvaluation => {
            fields.insert("marks2ndYear".to_string(), args.marks_2nd_year.clone());
            fields.insert(
                "marksAdmissionTest".to_string(),
                args.marks_admission_test.clone(),
            );
        }
        Stage::ActivityCheck if !args.no_activities => {
            for activity in &args.activities {
                fields.insert(activity.field().to_string(), "1".to_string());
            }
        }
        Stage::InterviewEvaluation => {
            fields.insert(
                "interviewPercentage".to_string(),
                args.interview_percentage.clone(),
            );
        }
        Stage::ActivityCheck | Stage::Accepted | Stage::Rejected => {}
    }
    fields
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let sink = Arc::new(InMemoryHistorySink::default());
    let service = AdmissionService::new(StageEvaluator::new(config.thresholds), sink.clone());

    service.register_student(StudentInfo {
        name: args.name.clone(),
        registration_number: args.registration_number.clone(),
        program: args.program.clone(),
    })?;

    println!("Admission workflow demo");
    loop {
        let view = service.view()?;
        if view.terminal {
            break;
        }
        let fields = stage_form(view.current_stage, &args);
        let receipt = service.submit(Submission::Form { fields })?;
        println!(
            "- {} -> {}: {} [{}]",
            receipt.record.from_stage.code(),
            receipt.record.to_stage.code(),
            receipt.record.outcome_label,
            receipt.record.condition_text
        );
    }

    let report = service.report()?;
    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("  Report unavailable: {}", err),
        }
        return Ok(());
    }

    render_report(&report);
    println!("\n{} transition(s) sent to the history sink", sink.events().len());
    Ok(())
}

fn render_report(report: &DecisionReport) {
    println!("\nAdmission Decision Report");
    if let Some(student) = &report.student {
        println!("  Student Name: {}", student.name);
        println!("  Registration No: {}", student.registration_number);
        println!("  Program: {}", student.program);
    }
    println!(
        "  Generated: {}",
        report
            .generated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    println!("  {}", report.summary());

    println!("History (newest first):");
    for entry in history_log(&report.history) {
        println!("  - {}", entry.line());
    }

    println!("Execution path:");
    let nodes: Vec<&str> = report.path.nodes.iter().map(|node| node.code).collect();
    println!("  {}", nodes.join(" -> "));
    for edge in &report.path.edges {
        println!(
            "  {} -> {}: {}",
            edge.from.code(),
            edge.to.code(),
            edge.label
        );
    }
}
