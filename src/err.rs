use std::fmt;

//--------------------------------------------------------------------------------------------------

/// The closed set of ways a route computation can fail.
///
/// Per-criterion "no path found" is *not* an error (the planner drops that criterion silently);
/// this type only covers the dispositions that are fatal for the whole request.
#[derive(Debug)]
pub enum Error {
    /// The Overpass request timed out or the transport failed.
    Overpass(reqwest::Error),
    /// Overpass answered, but with a non-success HTTP status.
    OverpassStatus { status: u16, body: String },
    /// The Overpass response body wasn't the JSON shape expected.
    Decode(serde_json::Error),
    /// Every requested criterion failed to find a path.
    NoRoutes,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Overpass(e) => write!(f, "Overpass API error: {}", e),
            Error::OverpassStatus { status, body } => {
                write!(f, "Overpass API returned status {}: {}", status, body)
            }
            Error::Decode(e) => write!(f, "Could not decode Overpass response: {}", e),
            Error::NoRoutes => write!(f, "No valid routes found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Overpass(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Overpass(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e)
    }
}
