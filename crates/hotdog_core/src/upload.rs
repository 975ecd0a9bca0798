//! One upload → classify → render cycle, independent of any window toolkit.

use crate::client::Classify;
use crate::error::{ClassifyError, UploadError};
use crate::label::{LabelPolicy, Prediction, Verdict};
use std::fs;
use std::path::Path;

/// Bytes of a user-selected file. Not validated in any way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub name: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| UploadError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Ok(Self { name, bytes })
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("upload")
    }
}

/// Which indicator the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Positive,
    Negative,
}

impl Indicator {
    /// Only a positive verdict earns the positive indicator.
    pub fn for_verdict(verdict: Verdict) -> Self {
        if verdict.is_positive() {
            Indicator::Positive
        } else {
            Indicator::Negative
        }
    }
}

/// Everything the renderer needs after a successful classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub prediction: Prediction,
    pub indicator: Indicator,
    pub caption: String,
}

impl Outcome {
    pub fn new(prediction: Prediction, policy: &LabelPolicy) -> Self {
        let indicator = Indicator::for_verdict(prediction.verdict);
        let caption = match prediction.verdict {
            Verdict::Positive => format!("{} 🌭", policy.positive()),
            Verdict::Negative => format!("{} 🥸", prediction.label),
            Verdict::Unknown => format!(
                "I don't know what that is 🥸. It's not a {}",
                policy.positive().to_lowercase()
            ),
        };
        Self {
            prediction,
            indicator,
            caption,
        }
    }
}

/// Run a single upload cycle.
///
/// `None` (or an empty blob) means nothing was uploaded: the classifier is not
/// called and there is nothing to render.
pub fn run_upload<C>(
    classifier: &C,
    policy: &LabelPolicy,
    upload: Option<&ImageBlob>,
) -> Option<Result<Outcome, ClassifyError>>
where
    C: Classify + ?Sized,
{
    let blob = upload.filter(|b| !b.is_empty())?;
    let result = classifier.classify(&blob.bytes).map(|raw| {
        let outcome = Outcome::new(policy.interpret(raw), policy);
        tracing::info!(
            "{} classified as {:?} ({:?})",
            blob.display_name(),
            outcome.prediction.label,
            outcome.prediction.verdict
        );
        outcome
    });
    if let Err(e) = &result {
        tracing::warn!("classification of {} failed: {e}", blob.display_name());
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::cell::RefCell;
    use tempfile::tempdir;

    struct Canned {
        answer: Result<String, fn() -> ClassifyError>,
        calls: RefCell<Vec<Vec<u8>>>,
    }

    impl Canned {
        fn ok(answer: &str) -> Self {
            Self {
                answer: Ok(answer.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                answer: Err(|| ClassifyError::Timeout {
                    endpoint: "http://fake".into(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Classify for Canned {
        fn classify(&self, image: &[u8]) -> Result<String, ClassifyError> {
            self.calls.borrow_mut().push(image.to_vec());
            match &self.answer {
                Ok(s) => Ok(s.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn blob(bytes: &[u8]) -> ImageBlob {
        ImageBlob::new(Some("dog.jpg".into()), bytes.to_vec())
    }

    #[test]
    fn no_upload_makes_no_call() {
        let fake = Canned::ok("Hotdog");
        assert!(run_upload(&fake, &LabelPolicy::default(), None).is_none());
        assert!(fake.calls.borrow().is_empty());
    }

    #[test]
    fn empty_blob_counts_as_no_upload() {
        let fake = Canned::ok("Hotdog");
        let empty = blob(b"");
        assert!(run_upload(&fake, &LabelPolicy::default(), Some(&empty)).is_none());
        assert!(fake.calls.borrow().is_empty());
    }

    #[test]
    fn positive_label_selects_positive_indicator() -> Result<()> {
        let fake = Canned::ok("\"Hotdog\"");
        let image = blob(b"\xff\xd8jpeg");
        let outcome = run_upload(&fake, &LabelPolicy::default(), Some(&image)).unwrap()?;
        assert_eq!(outcome.indicator, Indicator::Positive);
        assert_eq!(outcome.prediction.label, "Hotdog");
        assert_eq!(outcome.caption, "Hotdog 🌭");
        assert_eq!(*fake.calls.borrow(), vec![image.bytes.clone()]);
        Ok(())
    }

    #[test]
    fn negative_and_unknown_share_negative_indicator() -> Result<()> {
        let image = blob(b"png");
        for (answer, verdict) in [
            ("Not Hotdog", Verdict::Negative),
            ("", Verdict::Unknown),
            ("{oops", Verdict::Unknown),
        ] {
            let fake = Canned::ok(answer);
            let outcome = run_upload(&fake, &LabelPolicy::default(), Some(&image)).unwrap()?;
            assert_eq!(outcome.prediction.verdict, verdict);
            assert_eq!(outcome.indicator, Indicator::Negative);
        }
        Ok(())
    }

    #[test]
    fn unknown_caption_mentions_positive_label() {
        let policy = LabelPolicy::default();
        let outcome = Outcome::new(policy.interpret("Taco"), &policy);
        assert_eq!(
            outcome.caption,
            "I don't know what that is 🥸. It's not a hotdog"
        );
    }

    #[test]
    fn failure_propagates_without_outcome() {
        let fake = Canned::failing();
        let image = blob(b"bytes");
        let result = run_upload(&fake, &LabelPolicy::default(), Some(&image)).unwrap();
        assert!(matches!(result, Err(ClassifyError::Timeout { .. })));
        assert_eq!(fake.calls.borrow().len(), 1);
    }

    #[test]
    fn blob_from_path_keeps_name_and_bytes() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("snack.bin");
        fs::write(&path, b"not really an image")?;
        let blob = ImageBlob::from_path(&path)?;
        assert_eq!(blob.display_name(), "snack.bin");
        assert_eq!(blob.bytes, b"not really an image");
        Ok(())
    }

    #[test]
    fn blob_from_missing_path_errors() {
        let err = ImageBlob::from_path("/nope/missing.jpg").unwrap_err();
        assert!(matches!(err, UploadError::ReadImage { .. }));
    }
}
