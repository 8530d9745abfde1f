//! HTML view rendering for the task resource.

use crate::task::domain::Task;
use crate::web::paths;
use minijinja::{Environment, context};
use serde::Serialize;

const LAYOUT_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{% block title %}Tasks{% endblock %}</title>
  </head>
  <body>
    {% if notice %}
    <p class="notice">{{ notice }}</p>
    {% endif %}
    {% block content %}{% endblock %}
  </body>
</html>
"#;

const INDEX_TEMPLATE: &str = r#"{% extends "layout.html" %}
{% block content %}
    <h1>Tasks</h1>
    <ul class="tasks">
      {% for task in tasks %}
      <li><a href="{{ task.path }}">{{ task.title }}</a>{% if task.finished %} <span class="finished">(finished)</span>{% endif %}</li>
      {% endfor %}
    </ul>
    <a href="{{ new_task_path }}">New task</a>
{% endblock %}
"#;

const NEW_TEMPLATE: &str = r#"{% extends "layout.html" %}
{% block title %}New task{% endblock %}
{% block content %}
    <h1>New task</h1>
    {% if form.error %}
    <p class="error">{{ form.error }}</p>
    {% endif %}
    <form method="post" action="{{ tasks_path }}">
      <label for="task_title">Title</label>
      <input id="task_title" type="text" name="title" value="{{ form.title }}">
      <input type="submit" value="Create Task">
    </form>
    <a href="{{ tasks_path }}">Back</a>
{% endblock %}
"#;

const SHOW_TEMPLATE: &str = r#"{% extends "layout.html" %}
{% block title %}{{ task.title }}{% endblock %}
{% block content %}
    <h1>{{ task.title }}</h1>
    <p class="status">{% if task.finished %}Finished{% else %}Active{% endif %}</p>
    <p class="created">Created {{ task.created_at }}</p>
    <a href="{{ task.finish_path }}" rel="nofollow">Finish</a>
    <a href="{{ tasks_path }}">Back</a>
{% endblock %}
"#;

/// View model for a persisted task.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Whether the task has been finished.
    pub finished: bool,
    /// Show path for the task.
    pub path: String,
    /// Finish-action path for the task.
    pub finish_path: String,
    /// Human-readable creation timestamp.
    pub created_at: String,
}

impl TaskView {
    /// Builds a view model from a domain task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            finished: task.is_finished(),
            path: paths::task_path(task.id()),
            finish_path: paths::finish_task_path(task.id()),
            created_at: task.created_at().format("%Y-%m-%d %H:%M UTC").to_string(),
        }
    }
}

/// View model for the new-task form, saved or rejected.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFormView {
    /// Submitted title, echoed back into the input.
    pub title: String,
    /// Validation message, when the submission was rejected.
    pub error: Option<String>,
}

impl TaskFormView {
    /// Builds the form view for a rejected submission.
    #[must_use]
    pub fn with_error(title: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            error: Some(error.into()),
        }
    }
}

/// Compiled template environment for the task views.
#[derive(Debug)]
pub struct TemplateEngine {
    environment: Environment<'static>,
}

impl TemplateEngine {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template("layout.html", LAYOUT_TEMPLATE)?;
        environment.add_template("tasks/index.html", INDEX_TEMPLATE)?;
        environment.add_template("tasks/new.html", NEW_TEMPLATE)?;
        environment.add_template("tasks/show.html", SHOW_TEMPLATE)?;
        Ok(Self { environment })
    }

    /// Renders the task list.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_index(
        &self,
        tasks: &[TaskView],
        notice: Option<&str>,
    ) -> Result<String, minijinja::Error> {
        self.environment.get_template("tasks/index.html")?.render(context! {
            tasks,
            notice,
            new_task_path => paths::NEW_TASK_PATH,
        })
    }

    /// Renders the new-task form.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_new(&self, form: &TaskFormView) -> Result<String, minijinja::Error> {
        self.environment.get_template("tasks/new.html")?.render(context! {
            form,
            tasks_path => paths::TASKS_PATH,
        })
    }

    /// Renders the task detail page.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn render_show(&self, task: &TaskView) -> Result<String, minijinja::Error> {
        self.environment.get_template("tasks/show.html")?.render(context! {
            task,
            tasks_path => paths::TASKS_PATH,
        })
    }
}
