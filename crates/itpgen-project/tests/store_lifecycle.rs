use itpgen_catalog::{EquipmentClass, Voltage};
use itpgen_project::{
    fetch_project, DocumentStore, EquipmentSelection, MemoryStore, NewProject, ProjectFilter,
    ProjectPatch, ProjectStatus, VoltageOptions,
};
use std::sync::Arc;

#[tokio::test]
async fn create_update_delete() {
    let store = MemoryStore::new();
    let project = store
        .create(
            NewProject::new("Harbour Works")
                .with_client("Port Authority")
                .with_status(ProjectStatus::Active),
        )
        .await
        .unwrap();

    let mut lv = VoltageOptions::default();
    *lv.selection_mut(EquipmentClass::Cable) = EquipmentSelection::from_values(["IR", "CR"]);
    let updated = store
        .update(
            &project.id,
            ProjectPatch::new()
                .status(ProjectStatus::OnHold)
                .options(Voltage::Lv, lv),
        )
        .await
        .unwrap();

    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.client, "Port Authority");
    assert_eq!(updated.lv_options.cable.len(), 2);
    assert!(updated.updated_at >= project.created_at);

    let envelope = fetch_project(&store, &project.id).await.unwrap();
    assert_eq!(envelope.project, updated);

    store.delete(&project.id).await.unwrap();
    let err = fetch_project(&store, &project.id).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.body().error, "Project not found");
}

#[tokio::test]
async fn rejects_blank_customer() {
    let store = MemoryStore::new();
    assert!(store.create(NewProject::new("  ")).await.is_err());
    assert!(store.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let status = if i % 2 == 0 {
                    ProjectStatus::Active
                } else {
                    ProjectStatus::Draft
                };
                store
                    .create(NewProject::new(format!("Customer {i}")).with_status(status))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.len(), 50);
    let active = store
        .list(&ProjectFilter::all().with_status(ProjectStatus::Active))
        .await
        .unwrap();
    assert_eq!(active.len(), 25);
}
