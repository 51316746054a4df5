use crate::config_struct;

// ============================================================================
// AI ANALYSIS CONFIGURATION
// ============================================================================

config_struct! {
    /// Gemini analysis configuration
    ///
    /// Leave `api_key` empty to run without AI; verdicts then come back as
    /// OFFLINE without any network call.
    pub struct AiConfig {
        /// Google AI Studio API key; empty disables analysis
        api_key: String = String::new(),

        /// Model identifier passed to the generateContent endpoint
        model: String = "gemini-3-flash-preview".to_string(),

        /// Sampling temperature for verdict generation
        temperature: f64 = 0.9,

        /// Generative Language API base URL
        endpoint: String = "https://generativelanguage.googleapis.com/v1beta".to_string(),
    }
}
