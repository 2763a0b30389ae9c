//! Integration tests for `SqliteStore` against an in-memory database.

use faq_core::{
  Error as CoreError, StoreError as _,
  input::{SubjectInput, TopicInput},
  store::CatalogStore,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn domain(err: Error) -> CoreError {
  err
    .domain()
    .cloned()
    .unwrap_or_else(|| panic!("expected a domain error, got {err}"))
}

// ─── Subjects ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_subject_sets_fields() {
  let s = store().await;

  let subject = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  assert_eq!(subject.title, "Math");
  assert_eq!(subject.id, 1);
  assert!(subject.updated_at.is_none());

  let fetched = s.get_subject(subject.id).await.unwrap();
  assert_eq!(fetched.subject, subject);
  assert!(fetched.topics.is_empty());
}

#[tokio::test]
async fn create_subject_assigns_distinct_ids() {
  let s = store().await;
  let a = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let b = s.create_subject(SubjectInput::new("Physics")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn create_subject_duplicate_title_conflicts() {
  let s = store().await;
  s.create_subject(SubjectInput::new("Math")).await.unwrap();

  let err = s.create_subject(SubjectInput::new("Math")).await.unwrap_err();
  assert_eq!(domain(err), CoreError::SubjectExists("Math".into()));
  assert_eq!(s.list_subjects().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_subject_missing_is_not_found() {
  let s = store().await;
  let err = s.get_subject(42).await.unwrap_err();
  assert_eq!(domain(err), CoreError::SubjectNotFound(42));
}

#[tokio::test]
async fn list_subjects_newest_first() {
  let s = store().await;
  let a = s.create_subject(SubjectInput::new("A")).await.unwrap();
  let b = s.create_subject(SubjectInput::new("B")).await.unwrap();

  let ids: Vec<_> = s
    .list_subjects()
    .await
    .unwrap()
    .into_iter()
    .map(|subject| subject.id)
    .collect();
  assert_eq!(ids, vec![b.id, a.id]);
}

#[tokio::test]
async fn edit_subject_overwrites_title_and_stamps_updated_at() {
  let s = store().await;
  let created = s.create_subject(SubjectInput::new("Math")).await.unwrap();

  let edited = s
    .edit_subject(created.id, SubjectInput::new("Mathematics"))
    .await
    .unwrap();
  assert_eq!(edited.id, created.id);
  assert_eq!(edited.title, "Mathematics");
  assert_eq!(edited.created_at, created.created_at);
  assert!(edited.updated_at.is_some());
}

#[tokio::test]
async fn edit_subject_missing_is_not_found() {
  let s = store().await;
  let err = s.edit_subject(7, SubjectInput::new("Math")).await.unwrap_err();
  assert_eq!(domain(err), CoreError::SubjectNotFound(7));
}

#[tokio::test]
async fn delete_subject_missing_is_not_found() {
  let s = store().await;
  let err = s.delete_subject(3).await.unwrap_err();
  assert_eq!(domain(err), CoreError::SubjectNotFound(3));
}

#[tokio::test]
async fn deleted_subject_ids_are_not_reused() {
  let s = store().await;
  let first = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  s.delete_subject(first.id).await.unwrap();

  let second = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  assert!(second.id > first.id);
}

// ─── Topics ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_subject_embeds_topics_in_insertion_order() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let other = s.create_subject(SubjectInput::new("Art")).await.unwrap();

  let algebra = s
    .create_topic(TopicInput::new("Algebra", "x", math.id))
    .await
    .unwrap();
  s.create_topic(TopicInput::new("Painting", "oil", other.id))
    .await
    .unwrap();
  let geometry = s
    .create_topic(TopicInput::new("Geometry", "shapes", math.id))
    .await
    .unwrap();

  let fetched = s.get_subject(math.id).await.unwrap();
  assert_eq!(fetched.subject.title, "Math");
  assert_eq!(fetched.topics, vec![algebra, geometry]);
}

#[tokio::test]
async fn create_topic_duplicate_title_conflicts_across_subjects() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let art = s.create_subject(SubjectInput::new("Art")).await.unwrap();
  s.create_topic(TopicInput::new("Basics", "x", math.id))
    .await
    .unwrap();

  let err = s
    .create_topic(TopicInput::new("Basics", "y", art.id))
    .await
    .unwrap_err();
  assert_eq!(domain(err), CoreError::TopicExists("Basics".into()));
}

#[tokio::test]
async fn create_topic_for_missing_subject_is_not_found() {
  let s = store().await;
  let err = s
    .create_topic(TopicInput::new("Algebra", "x", 99))
    .await
    .unwrap_err();
  assert_eq!(domain(err), CoreError::SubjectNotFound(99));
  assert!(s.list_topics().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_topics_newest_first() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let a = s.create_topic(TopicInput::new("A", "a", math.id)).await.unwrap();
  let b = s.create_topic(TopicInput::new("B", "b", math.id)).await.unwrap();

  let ids: Vec<_> = s
    .list_topics()
    .await
    .unwrap()
    .into_iter()
    .map(|topic| topic.id)
    .collect();
  assert_eq!(ids, vec![b.id, a.id]);
}

#[tokio::test]
async fn list_topics_by_subject_filters() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let art = s.create_subject(SubjectInput::new("Art")).await.unwrap();
  s.create_topic(TopicInput::new("Algebra", "x", math.id)).await.unwrap();
  s.create_topic(TopicInput::new("Painting", "y", art.id)).await.unwrap();
  s.create_topic(TopicInput::new("Geometry", "z", math.id)).await.unwrap();

  let topics = s.list_topics_by_subject(math.id).await.unwrap();
  assert_eq!(topics.len(), 2);
  assert!(topics.iter().all(|t| t.subject_id == math.id));

  let none = s.list_topics_by_subject(art.id + 100).await.unwrap_err();
  assert_eq!(domain(none), CoreError::SubjectNotFound(art.id + 100));
}

#[tokio::test]
async fn list_topics_by_subject_without_topics_is_empty() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  assert!(s.list_topics_by_subject(math.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn edit_topic_replaces_fields_and_keeps_created_at() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let art = s.create_subject(SubjectInput::new("Art")).await.unwrap();
  let created = s
    .create_topic(TopicInput::new("Algebra", "x", math.id))
    .await
    .unwrap();

  let edited = s
    .edit_topic(created.id, TopicInput::new("Colour", "theory", art.id))
    .await
    .unwrap();
  assert_eq!(edited.id, created.id);
  assert_eq!(edited.title, "Colour");
  assert_eq!(edited.description, "theory");
  assert_eq!(edited.subject_id, art.id);
  assert_eq!(edited.created_at, created.created_at);
  assert!(edited.updated_at.is_some());

  assert_eq!(s.get_topic(created.id).await.unwrap(), edited);
}

#[tokio::test]
async fn edit_topic_missing_is_not_found() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let err = s
    .edit_topic(5, TopicInput::new("Algebra", "x", math.id))
    .await
    .unwrap_err();
  assert_eq!(domain(err), CoreError::TopicNotFound(5));
}

#[tokio::test]
async fn edit_topic_to_missing_subject_is_rejected() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let topic = s
    .create_topic(TopicInput::new("Algebra", "x", math.id))
    .await
    .unwrap();

  let err = s
    .edit_topic(topic.id, TopicInput::new("Algebra", "x", 404))
    .await
    .unwrap_err();
  assert_eq!(domain(err), CoreError::SubjectNotFound(404));

  // Rolled back: the topic is untouched.
  assert_eq!(s.get_topic(topic.id).await.unwrap(), topic);
}

#[tokio::test]
async fn delete_topic_then_get_is_not_found() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let topic = s
    .create_topic(TopicInput::new("Algebra", "x", math.id))
    .await
    .unwrap();

  s.delete_topic(topic.id).await.unwrap();
  let err = s.get_topic(topic.id).await.unwrap_err();
  assert_eq!(domain(err), CoreError::TopicNotFound(topic.id));

  let again = s.delete_topic(topic.id).await.unwrap_err();
  assert_eq!(domain(again), CoreError::TopicNotFound(topic.id));
}

// ─── Cascade ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_subject_cascades_to_its_topics() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();
  let art = s.create_subject(SubjectInput::new("Art")).await.unwrap();
  let algebra = s
    .create_topic(TopicInput::new("Algebra", "x", math.id))
    .await
    .unwrap();
  let geometry = s
    .create_topic(TopicInput::new("Geometry", "y", math.id))
    .await
    .unwrap();
  let painting = s
    .create_topic(TopicInput::new("Painting", "z", art.id))
    .await
    .unwrap();

  s.delete_subject(math.id).await.unwrap();

  for id in [algebra.id, geometry.id] {
    let err = s.get_topic(id).await.unwrap_err();
    assert_eq!(domain(err), CoreError::TopicNotFound(id));
  }
  assert_eq!(s.list_topics().await.unwrap(), vec![painting]);
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_subject_creates_admit_one_title() {
  let s = store().await;

  let handles: Vec<_> = (0..16)
    .map(|_| {
      let s = s.clone();
      tokio::spawn(async move { s.create_subject(SubjectInput::new("Math")).await })
    })
    .collect();

  let mut created = 0;
  for handle in handles {
    match handle.await.unwrap() {
      Ok(_) => created += 1,
      Err(err) => {
        assert_eq!(domain(err), CoreError::SubjectExists("Math".into()))
      }
    }
  }
  assert_eq!(created, 1);
  assert_eq!(s.list_subjects().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_topic_creates_admit_one_title() {
  let s = store().await;
  let math = s.create_subject(SubjectInput::new("Math")).await.unwrap();

  let handles: Vec<_> = (0..16)
    .map(|_| {
      let s = s.clone();
      tokio::spawn(async move {
        s.create_topic(TopicInput::new("Algebra", "x", math.id)).await
      })
    })
    .collect();

  let mut created = 0;
  for handle in handles {
    match handle.await.unwrap() {
      Ok(_) => created += 1,
      Err(err) => {
        assert_eq!(domain(err), CoreError::TopicExists("Algebra".into()))
      }
    }
  }
  assert_eq!(created, 1);
  assert_eq!(s.list_topics_by_subject(math.id).await.unwrap().len(), 1);
}

// ─── Store failures ──────────────────────────────────────────────────────────

#[tokio::test]
async fn closed_store_reports_database_error() {
  let s = store().await;
  let handle = s.clone();
  s.close().await.unwrap();

  let err = handle.list_subjects().await.unwrap_err();
  assert!(matches!(err, Error::Database(_)), "got {err}");
  assert!(err.domain().is_none());
}
