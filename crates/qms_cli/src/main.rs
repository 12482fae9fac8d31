//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `qms_core` linkage.
//! - Print seeded statistics for one area (route argument) or all areas.
//!
//! Reads an optional JSON config from `QMS_CONFIG`.

use qms_core::service::admin::AdminConsole;
use qms_core::service::capa::CapaSession;
use qms_core::service::document::DocumentSession;
use qms_core::service::fai::FaiSession;
use qms_core::service::final_inspection::FinalInspectionSession;
use qms_core::service::incoming::IncomingSession;
use qms_core::service::ipi::IpiSession;
use qms_core::service::mrb::MrbSession;
use qms_core::service::ncr::NcrSession;
use qms_core::service::procedure::ProcedureSession;
use qms_core::service::training::TrainingSession;
use qms_core::{Clock, FeatureArea, QmsConfig, SystemClock, WorkflowConfig};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let config = match std::env::var_os("QMS_CONFIG") {
        Some(path) => match QmsConfig::load_from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("qms_cli: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => QmsConfig::default(),
    };
    if let Err(err) = qms_core::init_from_config(&config.logging) {
        eprintln!("qms_cli: logging disabled: {err}");
    }

    println!("qms_core ping={}", qms_core::ping());
    println!("qms_core version={}", qms_core::core_version());

    let areas: Vec<FeatureArea> = match std::env::args().nth(1) {
        Some(route) => match FeatureArea::from_route(&route) {
            Some(area) => vec![area],
            None => {
                eprintln!("qms_cli: unknown route `{route}`");
                return ExitCode::FAILURE;
            }
        },
        None => FeatureArea::ALL.to_vec(),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    for area in areas {
        print_statistics(area, Arc::clone(&clock), config.workflow.clone());
    }
    log::info!("event=cli_done module=cli status=ok");
    ExitCode::SUCCESS
}

fn print_statistics(area: FeatureArea, clock: Arc<dyn Clock>, workflow: WorkflowConfig) {
    let stats = match area {
        FeatureArea::Capa => format!("{:?}", CapaSession::seeded(clock, workflow).statistics()),
        FeatureArea::Ncr => format!("{:?}", NcrSession::seeded(clock, workflow).statistics()),
        FeatureArea::Mrb => format!("{:?}", MrbSession::seeded(clock, workflow).statistics()),
        FeatureArea::Fai => format!("{:?}", FaiSession::seeded(clock, workflow).statistics()),
        FeatureArea::InProcessInspection => {
            format!("{:?}", IpiSession::seeded(clock, workflow).statistics())
        }
        FeatureArea::IncomingInspection => {
            format!("{:?}", IncomingSession::seeded(clock, workflow).statistics())
        }
        FeatureArea::FinalInspection => {
            format!(
                "{:?}",
                FinalInspectionSession::seeded(clock, workflow).statistics()
            )
        }
        FeatureArea::DocumentControl => {
            format!("{:?}", DocumentSession::seeded(clock, workflow).statistics())
        }
        FeatureArea::Procedures => {
            format!("{:?}", ProcedureSession::seeded(clock, workflow).statistics())
        }
        FeatureArea::Training => {
            format!("{:?}", TrainingSession::seeded(clock, workflow).statistics())
        }
        FeatureArea::UserSettings => {
            format!("{:?}", AdminConsole::seeded(clock, workflow).statistics())
        }
    };
    println!("{} ({}) {}", area.title(), area.route(), stats);
}
