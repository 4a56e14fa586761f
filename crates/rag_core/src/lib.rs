pub mod backend;
pub mod config;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests {
    use super::backend::{QueryBackend, QueryRequest};
    use super::error::{codes, AppError};
    use super::model::{ChatContext, ChatMessage, ChatResponse};

    struct FailingBackend;

    impl QueryBackend for FailingBackend {
        fn query(&self, request: &QueryRequest) -> Result<ChatResponse, AppError> {
            Err(
                AppError::new(codes::BACKEND_QUERY_FAILED, "Failed to execute query")
                    .with_details(format!("index={}", request.index_name))
                    .with_retryable(true),
            )
        }
    }

    struct CannedBackend;

    impl QueryBackend for CannedBackend {
        fn query(&self, request: &QueryRequest) -> Result<ChatResponse, AppError> {
            Ok(ChatResponse {
                message: ChatMessage {
                    content: format!("You asked: {} [a.pdf]", request.query),
                },
                context: ChatContext {
                    data_points: Some(vec!["a.pdf: body".to_string()]),
                    ..ChatContext::default()
                },
            })
        }
    }

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("ANSWER_TEST", "answer failed").with_retryable(false);
        assert_eq!(err.code, "ANSWER_TEST");
        assert_eq!(err.message, "answer failed");
        assert!(!err.retryable);
        assert!(err.is("ANSWER_TEST"));
    }

    #[test]
    fn app_error_display_includes_details() {
        let err = AppError::new("X", "boom");
        assert_eq!(err.to_string(), "[X] boom");
        assert_eq!(err.with_details("why").to_string(), "[X] boom (why)");
    }

    #[test]
    fn backend_trait_surfaces_collaborator_errors() {
        let req = QueryRequest {
            query: "q".to_string(),
            index_name: "manuals".to_string(),
        };
        let err = FailingBackend.query(&req).expect_err("should fail");
        assert_eq!(err.code, codes::BACKEND_QUERY_FAILED);
        assert!(err.retryable);

        let ok = CannedBackend.query(&req).expect("should succeed");
        assert!(ok.has_supporting_content());
        assert_eq!(ok.answer(false).data_points().len(), 1);
    }
}
