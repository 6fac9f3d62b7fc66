// catalog/src/views/menu.rs

use crate::model::User;
use crate::routes;

/// How a menu entry is followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMethod {
  Get,
  Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
  pub label: &'static str,
  pub href: &'static str,
  pub method: MenuMethod,
}

impl MenuItem {
  const fn link(label: &'static str, href: &'static str) -> Self {
    Self {
      label,
      href,
      method: MenuMethod::Get,
    }
  }
}

/// Account dropdown: a user header, a settings/profile group, and log out.
///
/// Settings and log out belong to the sign-in service; the catalog server
/// only sends them back to the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMenu {
  pub user: User,
  pub show_email: bool,
  pub groups: Vec<Vec<MenuItem>>,
  pub logout: MenuItem,
}

impl UserMenu {
  pub fn for_user(user: User) -> Self {
    Self {
      user,
      show_email: true,
      groups: vec![vec![
        MenuItem::link("Settings", routes::SETTINGS_PROFILE),
        // No profile page exists yet.
        MenuItem::link("Profile", "#"),
      ]],
      logout: MenuItem {
        label: "Log out",
        href: routes::LOGOUT,
        method: MenuMethod::Post,
      },
    }
  }

  pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
    self.groups.iter().flatten().chain(std::iter::once(&self.logout))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn logout_is_a_post_and_comes_last() {
    let menu = UserMenu::for_user(User::new("Test User", "test@example.com"));
    let labels: Vec<&str> = menu.items().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Settings", "Profile", "Log out"]);
    assert_eq!(menu.logout.method, MenuMethod::Post);
    assert_eq!(menu.logout.href, "/logout");
  }
}
