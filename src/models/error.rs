/*---------- Imports ----------*/
use lambda_runtime::Error;

/*---------- Enums ----------*/
#[derive(Debug)]
pub enum ClassifyError {
    /// The event has no `body`, or it isn't a string.
    MissingBody,
    MalformedBody(serde_json::Error),
    /// The decoded body isn't a mapping or has no `area` key.
    MissingArea,
    InvalidArea,
    Endpoint(Error),
    MalformedPrediction(String),
    UnrecognizedClass(i64),
}

impl ClassifyError {
    /// Status used when errors are surfaced as responses instead of failing the invocation.
    pub fn status_code(&self) -> u16 {
        match self {
            ClassifyError::MissingBody
            | ClassifyError::MalformedBody(_)
            | ClassifyError::MissingArea
            | ClassifyError::InvalidArea => 400,
            ClassifyError::Endpoint(_) | ClassifyError::MalformedPrediction(_) => 502,
            ClassifyError::UnrecognizedClass(_) => 500,
        }
    }
}

impl std::fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifyError::MissingBody => write!(f, "Missing body in event"),
            ClassifyError::MalformedBody(error) => {
                write!(f, "Couldn't parse request body: {}", error)
            }
            ClassifyError::MissingArea => write!(f, "Missing area in request body"),
            ClassifyError::InvalidArea => write!(f, "Area must be sent as a string"),
            ClassifyError::Endpoint(error) => write!(f, "Endpoint invocation failed: {}", error),
            ClassifyError::MalformedPrediction(raw) => {
                write!(f, "Couldn't parse endpoint prediction: {}", raw)
            }
            ClassifyError::UnrecognizedClass(class_id) => {
                write!(f, "Unrecognized class id: {}", class_id)
            }
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClassifyError::MalformedBody(error) => Some(error),
            ClassifyError::Endpoint(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}
