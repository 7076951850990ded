/// Name of the step output consumers read.
pub const OUTPUT_NAME: &str = "asana-task";

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskLinkOutcome {
    /// Task and pull request now reference each other
    Linked { permalink_url: String },
    /// Branch carried no task gid; nothing was posted
    NoTaskId { git_ref: String },
}

impl TaskLinkOutcome {
    /// Value published as the `asana-task` output.
    pub fn output_value(&self) -> String {
        match self {
            TaskLinkOutcome::Linked { permalink_url } => permalink_url.clone(),
            TaskLinkOutcome::NoTaskId { git_ref } => format!(
                "No Asana Task ID found in ref: {git_ref} Check the branch is of the format \
                 {{feature}}/{{id}} where id is a 16 digit integer and a valid Asana Task ID \
                 found in the URL of the task."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linked_output_is_permalink() {
        let outcome = TaskLinkOutcome::Linked {
            permalink_url: "https://app.asana.com/0/0/1".to_string(),
        };
        assert_eq!(outcome.output_value(), "https://app.asana.com/0/0/1");
    }

    #[test]
    fn test_no_task_id_output_names_ref() {
        let outcome = TaskLinkOutcome::NoTaskId {
            git_ref: "some-new-feature-1234567891234567".to_string(),
        };
        assert_eq!(
            outcome.output_value(),
            "No Asana Task ID found in ref: some-new-feature-1234567891234567 Check the branch \
             is of the format {feature}/{id} where id is a 16 digit integer and a valid Asana \
             Task ID found in the URL of the task."
        );
    }
}
