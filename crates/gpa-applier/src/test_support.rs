// test_support.rs — Fakes for applier unit tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use gpa_storage::{PolicyEntry, PolicyPath, PolicyStorage, StorageError};
use gpa_template::{ActionFactory, Enforcement, TemplateBinding, TemplateError};
use tracing_subscriber::fmt::MakeWriter;

/// Shared journal of `generate` calls, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Factory whose actions record each `generate` call and can be told to fail.
#[derive(Default)]
pub struct RecordingFactory {
    pub calls: CallLog,
    pub fail_template: Option<&'static str>,
}

impl RecordingFactory {
    pub fn failing_on(template_id: &'static str) -> Self {
        Self {
            calls: CallLog::default(),
            fail_template: Some(template_id),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ActionFactory for RecordingFactory {
    fn create(&self, binding: TemplateBinding) -> Box<dyn Enforcement> {
        let fail = self.fail_template == Some(binding.template_id.as_str());
        Box::new(RecordingAction {
            binding,
            calls: Arc::clone(&self.calls),
            fail,
        })
    }
}

struct RecordingAction {
    binding: TemplateBinding,
    calls: CallLog,
    fail: bool,
}

impl Enforcement for RecordingAction {
    fn template_id(&self) -> &str {
        &self.binding.template_id
    }

    fn generate(&self) -> Result<(), TemplateError> {
        self.calls
            .lock()
            .unwrap()
            .push(self.binding.template_id.clone());
        if self.fail {
            return Err(TemplateError::MissingVariable {
                template_id: self.binding.template_id.clone(),
                name: "Injected".to_string(),
            });
        }
        Ok(())
    }
}

/// Storage that fails every lookup and counts how often it was asked.
#[derive(Default)]
pub struct BrokenStorage {
    pub lookups: Mutex<usize>,
}

impl PolicyStorage for BrokenStorage {
    fn lookup(&self, _path: &PolicyPath) -> Result<Option<PolicyEntry>, StorageError> {
        *self.lookups.lock().unwrap() += 1;
        Err(StorageError::Backend("registry database is locked".to_string()))
    }
}

/// Storage that answers from a fixed list and counts lookups.
#[derive(Default)]
pub struct CountingStorage {
    pub entries: Vec<PolicyEntry>,
    pub lookups: Mutex<usize>,
}

impl CountingStorage {
    pub fn with(entries: Vec<PolicyEntry>) -> Self {
        Self {
            entries,
            lookups: Mutex::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl PolicyStorage for CountingStorage {
    fn lookup(&self, path: &PolicyPath) -> Result<Option<PolicyEntry>, StorageError> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self.entries.iter().find(|e| &e.path == path).cloned())
    }
}

/// In-memory log sink for asserting on emitted tracing output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Run `f` with a debug-level subscriber writing into this buffer.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
