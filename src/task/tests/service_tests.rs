//! Service orchestration tests for the four board operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDescription, TaskDraft, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{TaskService, TaskServiceError},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskService::new(Arc::new(InMemoryTaskRepository::new()))
}

fn draft(title: &str, description: Option<&str>, due_date: Option<NaiveDate>) -> TaskDraft {
    TaskDraft::new(
        TaskTitle::new(title).expect("valid title"),
        description.map(|value| TaskDescription::new(value).expect("valid description")),
        due_date,
    )
}

/// Repository decorator counting write operations.
#[derive(Debug, Clone)]
struct CountingRepository {
    inner: InMemoryTaskRepository,
    updates: Arc<AtomicUsize>,
}

impl CountingRepository {
    fn new() -> Self {
        Self {
            inner: InMemoryTaskRepository::new(),
            updates: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for CountingRepository {
    async fn insert(&self, task_draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        self.inner.insert(task_draft).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.inner.find_by_id(id).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(task).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.delete(id).await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.inner.list().await
    }
}

/// Repository wrapper failing selected operations with a storage fault.
#[derive(Debug, Clone, Default)]
struct FaultInjectingRepository {
    inner: InMemoryTaskRepository,
    fail_insert: bool,
    fail_update: bool,
    fail_list: bool,
}

impl FaultInjectingRepository {
    fn storage_fault() -> TaskRepositoryError {
        TaskRepositoryError::persistence(std::io::Error::other("simulated storage fault"))
    }
}

#[async_trait]
impl TaskRepository for FaultInjectingRepository {
    async fn insert(&self, task_draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        if self.fail_insert {
            return Err(Self::storage_fault());
        }
        self.inner.insert(task_draft).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.inner.find_by_id(id).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        if self.fail_update {
            return Err(Self::storage_fault());
        }
        self.inner.update(task).await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.inner.delete(id).await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        if self.fail_list {
            return Err(Self::storage_fault());
        }
        self.inner.list().await
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_fresh_ids_and_starts_incomplete(service: TestService) {
    let first = service
        .create_task(draft("First", None, None))
        .await
        .expect("creation should succeed");
    let second = service
        .create_task(draft("Second", None, None))
        .await
        .expect("creation should succeed");

    assert_ne!(first.id(), second.id());
    assert!(!first.completed());
    assert!(!second.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_fields_round_trip_verbatim(service: TestService) {
    let due = NaiveDate::from_ymd_opt(2030, 1, 1);
    service
        .create_task(draft("Buy milk", Some("2%"), due))
        .await
        .expect("creation should succeed");

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
    let task = tasks.first().expect("one task listed");
    assert_eq!(task.title().as_str(), "Buy milk");
    assert_eq!(task.description().map(TaskDescription::as_str), Some("2%"));
    assert_eq!(task.due_date(), due);
    assert!(!task.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_all_tasks_in_id_order(service: TestService) {
    for title in ["One", "Two", "Three"] {
        service
            .create_task(draft(title, None, None))
            .await
            .expect("creation should succeed");
    }

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 3);
    let ids: Vec<i32> = tasks.iter().map(|task| task.id().into_inner()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_marks_the_task_and_persists(service: TestService) {
    let created = service
        .create_task(draft("Finish report", None, None))
        .await
        .expect("creation should succeed");

    let completed = service
        .complete_task(created.id())
        .await
        .expect("completion should succeed");
    assert!(completed.completed());

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert!(tasks.iter().all(Task::completed));
}

#[tokio::test(flavor = "multi_thread")]
async fn complete_is_idempotent_without_rewriting() {
    let repository = CountingRepository::new();
    let service = TaskService::new(Arc::new(repository.clone()));
    let created = service
        .create_task(draft("Water plants", None, None))
        .await
        .expect("creation should succeed");

    let first = service
        .complete_task(created.id())
        .await
        .expect("first completion should succeed");
    let second = service
        .complete_task(created.id())
        .await
        .expect("second completion should succeed");

    assert!(first.completed());
    assert!(second.completed());
    // The second call is a no-op: exactly one write happened.
    assert_eq!(repository.update_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_missing_task_is_not_found(service: TestService) {
    let result = service.complete_task(TaskId::from_i32(999)).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::NotFound(id)) if id.into_inner() == 999
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_the_snapshot_and_removes_the_record(service: TestService) {
    let created = service
        .create_task(draft("Disposable", Some("soon gone"), None))
        .await
        .expect("creation should succeed");

    let deleted = service
        .delete_task(created.id())
        .await
        .expect("deletion should succeed");
    assert_eq!(deleted.title().as_str(), "Disposable");
    assert_eq!(
        deleted.description().map(TaskDescription::as_str),
        Some("soon gone")
    );

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_raises_not_found(service: TestService) {
    let created = service
        .create_task(draft("Only once", None, None))
        .await
        .expect("creation should succeed");

    service
        .delete_task(created.id())
        .await
        .expect("first deletion should succeed");
    let result = service.delete_task(created.id()).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_ids_never_surface_as_storage_faults(service: TestService) {
    let complete = service.complete_task(TaskId::from_i32(7)).await;
    let delete = service.delete_task(TaskId::from_i32(7)).await;
    assert!(matches!(complete, Err(TaskServiceError::NotFound(_))));
    assert!(matches!(delete, Err(TaskServiceError::NotFound(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_fault_during_create_leaves_the_list_unchanged() {
    let repository = FaultInjectingRepository {
        fail_insert: true,
        ..FaultInjectingRepository::default()
    };
    let service = TaskService::new(Arc::new(repository));

    let result = service.create_task(draft("Never stored", None, None)).await;
    assert!(matches!(result, Err(TaskServiceError::Repository(_))));

    let tasks = service.list_tasks().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_fault_during_complete_hides_the_mutation() {
    let repository = FaultInjectingRepository {
        fail_update: true,
        ..FaultInjectingRepository::default()
    };
    let service = TaskService::new(Arc::new(repository));
    let created = service
        .create_task(draft("Stubborn", None, None))
        .await
        .expect("creation should succeed");

    let result = service.complete_task(created.id()).await;
    assert!(matches!(result, Err(TaskServiceError::Repository(_))));

    // The failed write is invisible: the stored task is still incomplete.
    let tasks = service.list_tasks().await.expect("listing should succeed");
    let task = tasks.first().expect("task still listed");
    assert!(!task.completed());
}

#[tokio::test(flavor = "multi_thread")]
async fn storage_fault_during_list_is_a_repository_error() {
    let repository = FaultInjectingRepository {
        fail_list: true,
        ..FaultInjectingRepository::default()
    };
    let service = TaskService::new(Arc::new(repository));

    let result = service.list_tasks().await;
    assert!(matches!(result, Err(TaskServiceError::Repository(_))));
}
