// server/src/web/views/layout.rs

use catalog::{views::MenuMethod, UserMenu};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// One breadcrumb entry.
pub struct Crumb<'a> {
  pub title: &'a str,
  pub href: &'a str,
}

// Confirms deletes, disables every delete control once one is submitted, and
// disables a form's submit button while its request is out. Reset restores
// each field's data-original value. The description counter follows the textarea.
const PAGE_SCRIPT: &str = r#"
document.querySelectorAll('form[data-confirm]').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    if (!window.confirm(form.dataset.confirm)) { event.preventDefault(); return; }
    document.querySelectorAll('[data-delete]').forEach(function (b) { b.disabled = true; });
  });
});
document.querySelectorAll('form[data-single-submit]').forEach(function (form) {
  form.addEventListener('submit', function () {
    form.querySelectorAll('button[type=submit], [data-reset]').forEach(function (b) { b.disabled = true; });
    var button = form.querySelector('button[type=submit]');
    if (button && button.dataset.busyLabel) { button.textContent = button.dataset.busyLabel; }
  });
});
document.querySelectorAll('textarea[data-counter]').forEach(function (area) {
  var counter = document.getElementById(area.dataset.counter);
  var refresh = function () { counter.textContent = area.value.length + '/' + counter.dataset.limit; };
  area.addEventListener('input', refresh);
});
document.querySelectorAll('[data-reset]').forEach(function (button) {
  button.addEventListener('click', function () {
    button.form.querySelectorAll('[data-original]').forEach(function (field) {
      field.value = field.dataset.original;
      field.dispatchEvent(new Event('input'));
    });
  });
});
"#;

fn render_menu(menu: &UserMenu) -> Markup {
  html! {
    details class="user-menu" {
      summary {
        span class="avatar" { (menu.user.initials()) }
        " " (menu.user.name)
      }
      div class="user-info" {
        strong { (menu.user.name) }
        @if menu.show_email {
          span class="email" { (menu.user.email) }
        }
      }
      ul {
        @for group in &menu.groups {
          @for item in group {
            li { a href=(item.href) { (item.label) } }
          }
          li class="separator" {}
        }
        li {
          @match menu.logout.method {
            MenuMethod::Post => {
              form method="post" action=(menu.logout.href) {
                button type="submit" { (menu.logout.label) }
              }
            }
            MenuMethod::Get => {
              a href=(menu.logout.href) { (menu.logout.label) }
            }
          }
        }
      }
    }
  }
}

/// Wraps a page body in the document chrome: title, breadcrumbs, and user menu.
pub fn layout(title: &str, crumbs: &[Crumb<'_>], menu: &UserMenu, body: Markup) -> Markup {
  html! {
    (DOCTYPE)
    html lang="en" {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
      }
      body {
        header {
          nav class="breadcrumbs" {
            @for (i, crumb) in crumbs.iter().enumerate() {
              @if i > 0 { " / " }
              a href=(crumb.href) { (crumb.title) }
            }
          }
          (render_menu(menu))
        }
        main { (body) }
        script { (PreEscaped(PAGE_SCRIPT)) }
      }
    }
  }
}
