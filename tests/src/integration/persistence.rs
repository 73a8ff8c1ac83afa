//! # Persistence
//!
//! The JSON Lines store keeps the waitlist across process restarts.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use waitlist_enrollment::{
        EnrollResult, FileBackedWaitlistStore, WaitlistApi, WaitlistEntry, WaitlistService,
    };

    async fn open_service(path: &std::path::Path) -> WaitlistService<FileBackedWaitlistStore> {
        let store = FileBackedWaitlistStore::open(path).await.unwrap();
        WaitlistService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_enrollment_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waitlist.jsonl");

        let service = open_service(&path).await;
        assert_eq!(service.enroll("coach@example.com").await, EnrollResult::Enrolled);
        assert_eq!(service.enroll("trainer@example.com").await, EnrollResult::Enrolled);
        drop(service);

        let service = open_service(&path).await;
        assert_eq!(service.store().len().await, 2);
        assert_eq!(
            service.enroll("  Trainer@Example.com").await,
            EnrollResult::AlreadyEnrolled
        );
        assert_eq!(service.store().len().await, 2);
    }

    #[tokio::test]
    async fn test_file_holds_one_entry_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("waitlist.jsonl");

        let service = open_service(&path).await;
        service.enroll("coach@example.com").await;
        service.enroll("not-an-email").await;
        service.enroll("trainer@example.com").await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let raw: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(raw["email"], "coach@example.com");
        assert!(raw["createdAt"].is_string());

        let second: WaitlistEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.email, "trainer@example.com");
    }
}
