//! GraphQL Documents
//!
//! Every selection includes `__typename` and `id` so responses can be
//! normalized into the entity cache.

pub const ALL_ORGANIZATIONS: &str = r#"
query AllOrganizations {
  allOrganizations {
    __typename
    id
    name
    slug
  }
}
"#;

pub const ORGANIZATION_PROJECTS: &str = r#"
query GetOrgProjects($orgSlug: String!) {
  organizationProjects(orgSlug: $orgSlug) {
    __typename
    id
    name
    description
    status
    dueDate
    taskCount
    completedTaskCount
  }
}
"#;

pub const PROJECT_DETAILS: &str = r#"
query GetProjectDetails($id: ID!) {
  project(id: $id) {
    __typename
    id
    name
    description
    status
    dueDate
    tasks {
      __typename
      id
      title
      description
      status
      assigneeEmail
      dueDate
      comments {
        __typename
        id
        content
        authorEmail
        createdAt
      }
    }
  }
}
"#;

pub const CREATE_ORGANIZATION: &str = r#"
mutation CreateOrganization($name: String!, $email: String) {
  createOrganization(name: $name, email: $email) {
    organization {
      __typename
      id
      name
      slug
    }
  }
}
"#;

pub const CREATE_PROJECT: &str = r#"
mutation CreateProject($name: String!, $description: String, $organizationSlug: String!, $dueDate: Date) {
  createProject(name: $name, description: $description, organizationSlug: $organizationSlug, dueDate: $dueDate) {
    project {
      __typename
      id
      name
      description
      status
      dueDate
    }
  }
}
"#;

pub const UPDATE_PROJECT: &str = r#"
mutation UpdateProject($id: ID!, $name: String!, $description: String, $status: String!, $dueDate: Date) {
  updateProject(id: $id, name: $name, description: $description, status: $status, dueDate: $dueDate) {
    project {
      __typename
      id
      name
      description
      status
      dueDate
    }
  }
}
"#;

pub const DELETE_PROJECT: &str = r#"
mutation DeleteProject($id: ID!) {
  deleteProject(id: $id) {
    ok
  }
}
"#;

pub const CREATE_TASK: &str = r#"
mutation CreateTask($projectId: ID!, $title: String!, $description: String, $assigneeEmail: String, $dueDate: Date) {
  createTask(projectId: $projectId, title: $title, description: $description, assigneeEmail: $assigneeEmail, dueDate: $dueDate) {
    task {
      __typename
      id
      title
      status
    }
  }
}
"#;

pub const UPDATE_TASK: &str = r#"
mutation UpdateTask($id: ID!, $title: String!, $description: String, $assigneeEmail: String, $dueDate: Date) {
  updateTask(id: $id, title: $title, description: $description, assigneeEmail: $assigneeEmail, dueDate: $dueDate) {
    task {
      __typename
      id
      title
      description
      status
      assigneeEmail
      dueDate
    }
  }
}
"#;

pub const UPDATE_TASK_STATUS: &str = r#"
mutation UpdateTaskStatus($taskId: ID!, $status: String!) {
  updateTaskStatus(taskId: $taskId, status: $status) {
    task {
      __typename
      id
      status
    }
  }
}
"#;

pub const DELETE_TASK: &str = r#"
mutation DeleteTask($id: ID!) {
  deleteTask(id: $id) {
    ok
  }
}
"#;

pub const ADD_COMMENT: &str = r#"
mutation AddComment($taskId: ID!, $content: String!, $authorEmail: String!) {
  addComment(taskId: $taskId, content: $content, authorEmail: $authorEmail) {
    comment {
      __typename
      id
      content
      authorEmail
      createdAt
    }
  }
}
"#;
