//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# medchat configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[backend]
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# model = "gemini-2.0-flash"
# api_key = ""               # prefer the environment variable below
# api_key_env = "GEMINI_API_KEY"
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 400    # 1-8192
# top_k = 40                 # 1-100
# connect_timeout_secs = 10
# timeout_secs = 60
# fallback_message = "Sorry, I couldn't reach the AI service right now."

[formatter]
# max_items = 10             # 1-100

[reveal]
# word_interval_ms = 30      # 0-5000
# item_interval_ms = 300     # 0-10000

[router]
# keywords = [
#     "doctor", "specialist", "hospital", "clinic", "treatment",
#     "cardiologist", "dermatologist", "neurologist", "oncologist",
#     "gynecologist", "urologist", "pediatrician", "psychiatrist",
#     "surgeon", "physician", "dentist",
# ]
# search_base_url = "https://www.google.com/search"

[conversation]
# follow_up_marker = "more info"
# placeholder = "..."

[speech]
# enabled = true
# api_key_env = "OPENAI_API_KEY"
# model = "whisper-1"
# language = "en"

[logging]
# level = "WARNING"          # DEBUG, INFO, WARNING, ERROR
"#
}
