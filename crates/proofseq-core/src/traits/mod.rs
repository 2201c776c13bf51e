mod diagnostics;
mod validator;

pub use diagnostics::IDiagnosticSink;
pub use validator::ISequenceValidator;
