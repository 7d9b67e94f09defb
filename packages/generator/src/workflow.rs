// ABOUTME: Generator workflow: prompt to code, then persist by session state
// ABOUTME: Signed-in users save to the backend, guests append to the local buffer

use std::fmt;
use std::path::{Path, PathBuf};

use shipui_ai::{build_component_prompt, extract_code, GenAIError, GenAIService};
use shipui_api::NewHistoryRecord;
use shipui_auth::SessionStore;
use shipui_config::AppConfig;
use shipui_core::{
    write_code_file, ExportError, Framework, GenerationRecord, Notification, SharedNotifier,
    GENERATOR_EXPORT_NAME,
};
use shipui_settings::ApiKeySettings;
use shipui_storage::GuestHistory;
use tracing::{error, info, warn};

use crate::error::GenerateError;

/// Where a generation ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    Backend,
    Guest,
    /// Code was produced but could not be saved
    NotSaved,
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Persistence::Backend => "saved to history",
            Persistence::Guest => "saved locally",
            Persistence::NotSaved => "not saved",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub prompt: String,
    pub framework: Framework,
    pub code: String,
    pub persisted: Persistence,
}

pub struct GeneratorWorkflow {
    config: AppConfig,
    session: SessionStore,
    guest: GuestHistory,
    settings: ApiKeySettings,
    notifier: SharedNotifier,
}

impl GeneratorWorkflow {
    pub fn new(
        config: AppConfig,
        session: SessionStore,
        guest: GuestHistory,
        settings: ApiKeySettings,
        notifier: SharedNotifier,
    ) -> Self {
        Self {
            config,
            session,
            guest,
            settings,
            notifier,
        }
    }

    /// Generate a component and save it for the current session
    ///
    /// A failure to save is reported but does not discard the code.
    pub async fn generate(
        &self,
        prompt: &str,
        framework: Framework,
    ) -> Result<Generation, GenerateError> {
        if prompt.trim().is_empty() {
            self.notifier
                .notify(Notification::error(GenerateError::EmptyPrompt.user_message()));
            return Err(GenerateError::EmptyPrompt);
        }

        let code = match self.call_model(prompt, framework).await {
            Ok(code) => code,
            Err(e) => {
                error!(error = %e, kind = %e.kind(), "Generation Error");
                let err = GenerateError::Ai(e);
                self.notifier.notify(Notification::error(err.user_message()));
                return Err(err);
            }
        };

        let persisted = self.persist(prompt, framework, &code).await;
        Ok(Generation {
            prompt: prompt.to_string(),
            framework,
            code,
            persisted,
        })
    }

    async fn call_model(&self, prompt: &str, framework: Framework) -> Result<String, GenAIError> {
        // Resolved per call so a key saved in settings applies immediately
        let resolved = self
            .settings
            .resolve(self.config.default_api_key.as_deref())
            .await
            .ok_or(GenAIError::MissingCredential)?;
        info!(source = %resolved.source, %framework, "generating component");

        let service = GenAIService::with_api_key(&self.config, Some(resolved.key))?;
        let response = service
            .generate_text(&build_component_prompt(prompt, framework))
            .await?;

        Ok(extract_code(&response.data))
    }

    async fn persist(&self, prompt: &str, framework: Framework, code: &str) -> Persistence {
        if self.session.is_authenticated().await {
            let record = NewHistoryRecord {
                prompt: prompt.to_string(),
                framework,
                code: code.to_string(),
            };
            return match self.session.api().create_history(&record).await {
                Ok(_) => Persistence::Backend,
                Err(e) => {
                    warn!(error = %e, "failed to save generation to history");
                    self.notifier.notify(Notification::warning(
                        "Generated code, but failed to save to history.",
                    ));
                    Persistence::NotSaved
                }
            };
        }

        match self
            .guest
            .append(GenerationRecord::guest(prompt, framework, code))
            .await
        {
            Ok(()) => Persistence::Guest,
            Err(e) => {
                warn!(error = %e, "failed to save generation to guest history");
                self.notifier.notify(Notification::warning(
                    "Generated code, but failed to save to history.",
                ));
                Persistence::NotSaved
            }
        }
    }

    /// Write the code to `GenUI-Code.html` inside `dir`
    pub fn export_code(&self, code: &str, dir: &Path) -> Result<PathBuf, ExportError> {
        match write_code_file(dir, GENERATOR_EXPORT_NAME, code) {
            Ok(path) => {
                self.notifier.notify(Notification::success("File downloaded"));
                Ok(path)
            }
            Err(e) => {
                self.notifier.notify(Notification::error(e.to_string()));
                Err(e)
            }
        }
    }
}
