//! Cache behaviour for the board's mutation flows, driven with
//! server-shaped responses.

use entity_cache::{store_field_name, EntityCache, EntityKey};
use serde_json::{json, Value};

fn project_root(id: &str) -> String {
    store_field_name("project", &json!({ "id": id }))
}

fn projects_root(slug: &str) -> String {
    store_field_name("organizationProjects", &json!({ "orgSlug": slug }))
}

fn task(id: &str, title: &str, status: &str, comments: Value) -> Value {
    json!({
        "__typename": "TaskType",
        "id": id,
        "title": title,
        "description": "",
        "status": status,
        "assigneeEmail": null,
        "dueDate": null,
        "comments": comments
    })
}

fn comment(id: &str, content: &str) -> Value {
    json!({
        "__typename": "TaskCommentType",
        "id": id,
        "content": content,
        "authorEmail": "user@techcorp.com",
        "createdAt": "2024-05-01T10:00:00+00:00"
    })
}

fn project_detail(id: &str, tasks: Value) -> Value {
    json!({
        "__typename": "ProjectType",
        "id": id,
        "name": "Launch",
        "description": "",
        "status": "ACTIVE",
        "dueDate": null,
        "tasks": tasks
    })
}

fn seeded_cache() -> EntityCache {
    let mut cache = EntityCache::new();
    cache.write_query(
        &project_root("p1"),
        &project_detail(
            "p1",
            json!([
                task("t1", "Write spec", "TODO", json!([comment("c1", "first")])),
                task("t2", "Ship it", "IN_PROGRESS", json!([]))
            ]),
        ),
    );
    cache
}

fn comment_ids(cache: &EntityCache, task_id: &str) -> Vec<String> {
    let task = cache.read_entity(&EntityKey::new("TaskType", task_id)).unwrap();
    task["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_add_comment_appends_exactly_one_at_tail() {
    let mut cache = seeded_cache();
    let before = comment_ids(&cache, "t1");
    let sibling_before = cache.read_entity(&EntityKey::new("TaskType", "t2"));

    cache
        .append_entity(&EntityKey::new("TaskType", "t1"), "comments", &comment("c2", "second"))
        .unwrap();

    let after = comment_ids(&cache, "t1");
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(String::as_str), Some("c2"));
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(cache.read_entity(&EntityKey::new("TaskType", "t2")), sibling_before);

    // Other fields of the task untouched
    let t1 = cache.read_entity(&EntityKey::new("TaskType", "t1")).unwrap();
    assert_eq!(t1["title"], "Write spec");
    assert_eq!(t1["status"], "TODO");
}

#[test]
fn test_add_comment_to_uncached_task_is_noop() {
    let mut cache = seeded_cache();
    let snapshot = cache.read_query(&project_root("p1"));
    let len = cache.len();

    let written = cache
        .append_entity(&EntityKey::new("TaskType", "gone"), "comments", &comment("c9", "late"))
        .unwrap();

    assert_eq!(written, None);
    assert_eq!(cache.len(), len);
    assert!(!cache.contains(&EntityKey::new("TaskCommentType", "c9")));
    assert_eq!(cache.read_query(&project_root("p1")), snapshot);
}

#[test]
fn test_appended_comment_converges_with_refetch() {
    let mut patched = seeded_cache();
    patched
        .append_entity(&EntityKey::new("TaskType", "t1"), "comments", &comment("c2", "second"))
        .unwrap();

    let server_state = project_detail(
        "p1",
        json!([
            task("t1", "Write spec", "TODO", json!([comment("c1", "first"), comment("c2", "second")])),
            task("t2", "Ship it", "IN_PROGRESS", json!([]))
        ]),
    );
    let mut refetched = EntityCache::new();
    refetched.write_query(&project_root("p1"), &server_state);

    assert_eq!(
        patched.read_query(&project_root("p1")),
        refetched.read_query(&project_root("p1"))
    );

    // A refetch landing after the patch leaves a single copy of the comment
    patched.write_query(&project_root("p1"), &server_state);
    patched
        .append_entity(&EntityKey::new("TaskType", "t1"), "comments", &comment("c2", "second"))
        .unwrap();
    assert_eq!(comment_ids(&patched, "t1"), vec!["c1", "c2"]);
}

#[test]
fn test_delete_task_evicts_and_collects_its_comments() {
    let mut cache = seeded_cache();

    assert!(cache.evict(&EntityKey::new("TaskType", "t1")));
    let removed = cache.gc();

    assert_eq!(removed, vec![EntityKey::new("TaskCommentType", "c1")]);
    let project = cache.read_query(&project_root("p1")).unwrap();
    let ids: Vec<&str> = project["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["t2"]);
}

#[test]
fn test_deleted_project_absent_from_every_view() {
    let mut cache = seeded_cache();
    cache.write_query(
        &projects_root("acme"),
        &json!([
            { "__typename": "ProjectType", "id": "p1", "name": "Launch", "taskCount": 2, "completedTaskCount": 0 },
            { "__typename": "ProjectType", "id": "p2", "name": "Other", "taskCount": 0, "completedTaskCount": 0 }
        ]),
    );

    cache.evict(&EntityKey::new("ProjectType", "p1"));
    cache.gc();

    let list = cache.read_query(&projects_root("acme")).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], "p2");
    assert_eq!(cache.read_query(&project_root("p1")), Some(Value::Null));
    assert!(!cache.contains(&EntityKey::new("TaskType", "t1")));
    assert!(!cache.contains(&EntityKey::new("TaskCommentType", "c1")));
}

#[test]
fn test_status_update_merges_into_shared_record() {
    let mut cache = seeded_cache();
    cache
        .write_entity(&json!({ "__typename": "TaskType", "id": "t1", "status": "DONE" }))
        .unwrap();

    let project = cache.read_query(&project_root("p1")).unwrap();
    assert_eq!(project["tasks"][0]["status"], "DONE");
    assert_eq!(project["tasks"][0]["comments"][0]["id"], "c1");
}

#[test]
fn test_end_to_end_board_flow() {
    let mut cache = EntityCache::new();

    // Organization "Acme" created and listed
    cache.write_query(
        "allOrganizations",
        &json!([{ "__typename": "OrganizationType", "id": "o1", "name": "Acme", "slug": "acme" }]),
    );
    let orgs = cache.read_query("allOrganizations").unwrap();
    assert_eq!(orgs[0]["slug"], "acme");

    // Project "Launch" with no due date, 0/0 tasks
    cache.write_query(
        &projects_root("acme"),
        &json!([{
            "__typename": "ProjectType", "id": "p1", "name": "Launch", "description": "",
            "status": "ACTIVE", "dueDate": null, "taskCount": 0, "completedTaskCount": 0
        }]),
    );
    let projects = cache.read_query(&projects_root("acme")).unwrap();
    assert_eq!(projects[0]["taskCount"], 0);
    assert_eq!(projects[0]["dueDate"], Value::Null);

    // Task "Write spec" appears in TODO after the detail refetch
    cache.write_query(
        &project_root("p1"),
        &project_detail("p1", json!([task("t1", "Write spec", "TODO", json!([]))])),
    );
    let detail = cache.read_query(&project_root("p1")).unwrap();
    assert_eq!(detail["tasks"][0]["status"], "TODO");

    // Status to DONE, counters arrive with the next list fetch
    cache
        .write_entity(&json!({ "__typename": "TaskType", "id": "t1", "status": "DONE" }))
        .unwrap();
    cache.write_query(
        &projects_root("acme"),
        &json!([{ "__typename": "ProjectType", "id": "p1", "taskCount": 1, "completedTaskCount": 1 }]),
    );
    let detail = cache.read_query(&project_root("p1")).unwrap();
    assert_eq!(detail["tasks"][0]["status"], "DONE");
    let projects = cache.read_query(&projects_root("acme")).unwrap();
    assert_eq!(projects[0]["completedTaskCount"], 1);
    assert_eq!(projects[0]["name"], "Launch");

    // Delete the task, then the project
    cache.evict(&EntityKey::new("TaskType", "t1"));
    cache.gc();
    let detail = cache.read_query(&project_root("p1")).unwrap();
    assert_eq!(detail["tasks"], json!([]));

    cache.evict(&EntityKey::new("ProjectType", "p1"));
    cache.gc();
    let projects = cache.read_query(&projects_root("acme")).unwrap();
    assert_eq!(projects, json!([]));
    assert!(cache.contains(&EntityKey::new("OrganizationType", "o1")));
}
