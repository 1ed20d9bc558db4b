/// One request against the external text-completion backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub instructions: String,
    pub input: String,
    pub temperature: f32,
    /// Opaque continuation token from a previous call; lets the backend
    /// resolve prior conversational context without this service storing any.
    pub previous_response_id: Option<String>,
}

/// The backend's untrusted output: free text plus a fresh continuation token.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    pub text: String,
    pub response_id: Option<String>,
}
