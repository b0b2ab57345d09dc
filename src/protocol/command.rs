//! Request definitions
//!
//! One variant per remotely callable catalog operation.

/// Request types, named by their first path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    List,
    Find,
    GetCopies,
    AddCopies,
    SubCopies,
}

impl RequestType {
    /// Path segment selecting this operation
    pub fn segment(self) -> &'static str {
        match self {
            RequestType::List => "list",
            RequestType::Find => "find",
            RequestType::GetCopies => "getcopies",
            RequestType::AddCopies => "addcopies",
            RequestType::SubCopies => "subcopies",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "list" => Some(RequestType::List),
            "find" => Some(RequestType::Find),
            "getcopies" => Some(RequestType::GetCopies),
            "addcopies" => Some(RequestType::AddCopies),
            "subcopies" => Some(RequestType::SubCopies),
            _ => None,
        }
    }
}

/// A parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// List every book
    List,

    /// Fetch one book by ID
    Find { id: String },

    /// Read the copy count of a book
    GetCopies { id: String },

    /// Add copies to a book
    AddCopies { id: String, copies: i64 },

    /// Remove copies from a book
    SubCopies { id: String, copies: i64 },
}

impl Request {
    /// Get the request type
    pub fn request_type(&self) -> RequestType {
        match self {
            Request::List => RequestType::List,
            Request::Find { .. } => RequestType::Find,
            Request::GetCopies { .. } => RequestType::GetCopies,
            Request::AddCopies { .. } => RequestType::AddCopies,
            Request::SubCopies { .. } => RequestType::SubCopies,
        }
    }

    /// Book ID targeted by the request, if any
    pub fn id(&self) -> Option<&str> {
        match self {
            Request::List => None,
            Request::Find { id }
            | Request::GetCopies { id }
            | Request::AddCopies { id, .. }
            | Request::SubCopies { id, .. } => Some(id),
        }
    }
}
