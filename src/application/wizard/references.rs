//! Reference letter batch generation.

use crate::domain::petition::{prompts, ReferenceLetter};
use crate::ports::GenerationRequest;

use super::{WizardController, WizardError};

impl WizardController {
    /// Generates one reference letter per complete recommender record and
    /// completes the wizard.
    ///
    /// Incomplete records are skipped entirely; they get no letter and no
    /// backend call. Letters are generated sequentially in record order and
    /// committed all-or-nothing: if any generation fails, the whole batch
    /// is discarded and the wizard stays on the collection step.
    pub async fn generate_reference_letters(&mut self) -> Result<usize, WizardError> {
        struct Job {
            criterion: String,
            prompt: String,
            recommender_name: String,
        }

        let jobs: Vec<Job> = {
            let eligible = self.workflow.reference_batch_inputs()?;
            eligible
                .into_iter()
                .enumerate()
                .map(|(position, recommender)| Job {
                    // Numbered over the eligible subset, starting at 1.
                    criterion: format!("Reference Letter {}", position + 1),
                    prompt: prompts::reference_letter(self.workflow.background(), recommender),
                    recommender_name: recommender.name.clone(),
                })
                .collect()
        };

        tracing::info!(
            client_id = %self.workflow.client_id(),
            count = jobs.len(),
            "generating reference letter batch"
        );

        let mut letters = Vec::with_capacity(jobs.len());
        for job in jobs {
            let request = GenerationRequest::new(*self.workflow.client_id(), job.prompt)
                .with_criterion(job.criterion.clone());

            let document = self
                .generation
                .generate_document(request)
                .await
                .map_err(|e| {
                    tracing::warn!(
                        criterion = %job.criterion,
                        error = %e,
                        "reference letter batch aborted"
                    );
                    WizardError::generation("reference letters", e)
                })?;

            letters.push(ReferenceLetter {
                generation_id: document.generation_id,
                recommender_name: job.recommender_name,
                text: document.text,
            });
        }

        let count = letters.len();
        self.workflow.commit_reference_letters(letters)?;

        tracing::info!(
            client_id = %self.workflow.client_id(),
            count,
            "reference letter batch committed"
        );
        Ok(count)
    }
}
