//! Scenario: a full run over two directory snapshots.

use std::sync::{Arc, Mutex};

use herald::domain::ports::{ChangeNotifier, FileContext, ProjectInfo};
use herald::{ChangeReport, HeraldResult, ProcessUseCase, SnapshotWalker};

use crate::common::*;

/// Records every callback as a short line
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

fn counts(report: &ChangeReport) -> String {
    format!(
        "+{} -{} ~{}",
        report.added.len(),
        report.removed.len(),
        report.modified.len()
    )
}

impl ChangeNotifier for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    fn description(&self) -> &'static str {
        "Records callbacks"
    }

    fn on_run_start(&mut self, project: &ProjectInfo) -> HeraldResult<()> {
        self.push(format!("start {}", project.name));
        Ok(())
    }

    fn on_changes(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.push(format!("changes {} {}", file.path.display(), counts(report)));
        Ok(())
    }

    fn on_file_added(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.push(format!("added {} {}", file.path.display(), counts(report)));
        Ok(())
    }

    fn on_file_deleted(&mut self, file: FileContext<'_>, report: &ChangeReport) -> HeraldResult<()> {
        self.push(format!("deleted {} {}", file.path.display(), counts(report)));
        Ok(())
    }

    fn on_run_finish(&mut self) -> HeraldResult<()> {
        self.push("finish".to_string());
        Ok(())
    }
}

#[test]
fn run_over_two_snapshots_notifies_in_order() {
    let env = TestEnv::new();
    env.write("v1/Billing.java", BILLING_V1);
    env.write("v1/Ledger.java", LEDGER);
    env.write("release/Billing.java", BILLING_V2);
    env.write("release/Audit.java", BILLING_V1.replace("Billing", "Audit").as_str());

    let mut walker = SnapshotWalker::open(
        &env.path("v1"),
        &env.path("release"),
        &["java".to_string()],
    )
    .unwrap();

    let recorder = Recorder::default();
    let mut use_case = ProcessUseCase::new(extractor(), vec![Box::new(recorder.clone())]);
    let summary = use_case.execute(&mut walker).unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            "start release",
            "added Audit.java +1 -0 ~0",
            "changes Billing.java +0 -0 ~1",
            "deleted Ledger.java +0 -2 ~0",
            "finish",
        ]
    );
    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.added, 1);
    assert_eq!(summary.removed, 2);
    assert_eq!(summary.modified, 1);
    assert!(summary.has_changes());
}

#[test]
fn syntax_error_stops_the_run() {
    let env = TestEnv::new();
    env.write("v1/Broken.java", BILLING_V1);
    env.write("v2/Broken.java", "class Broken { void run( }\n");

    let mut walker =
        SnapshotWalker::open(&env.path("v1"), &env.path("v2"), &["java".to_string()]).unwrap();
    let mut use_case = ProcessUseCase::new(extractor(), Vec::new());

    let err = use_case.execute(&mut walker).unwrap_err();
    assert!(matches!(err, herald::HeraldError::Syntax { .. }), "{err}");
}
