//! Route guard and navigation tests driven through a real session store.

use anyhow::Result;

use wellbeing_hub::config::AccessConfig;
use wellbeing_hub::identity::SessionStore;
use wellbeing_hub::nav::{NavMenu, NavSection};
use wellbeing_hub::routes::{RouteDecision, RouteTable};

async fn signed_in(email: &str) -> Result<SessionStore> {
    let store = SessionStore::demo(&AccessConfig::instant());
    store.login(email, "pw").await?;
    Ok(store)
}

#[tokio::test]
async fn anonymous_sent_to_login_with_origin() -> Result<()> {
    let table = RouteTable::dashboard(&AccessConfig::default());
    let store = SessionStore::demo(&AccessConfig::instant());
    let snap = store.snapshot();

    for path in ["/dashboard", "/students", "/cases", "/reports", "/settings"] {
        assert_eq!(
            table.decide(&snap, path),
            RouteDecision::RedirectToLogin { to: "/login".into(), from: path.into() },
            "path {}", path
        );
    }
    assert_eq!(table.decide(&snap, "/login"), RouteDecision::Render);
    Ok(())
}

#[tokio::test]
async fn under_privileged_sent_to_landing_not_login() -> Result<()> {
    let table = RouteTable::dashboard(&AccessConfig::default());
    let store = signed_in("leadership@school.edu").await?;
    let snap = store.snapshot();

    assert_eq!(table.decide(&snap, "/students"), RouteDecision::RedirectToLanding { to: "/dashboard".into() });
    assert_eq!(table.decide(&snap, "/settings"), RouteDecision::RedirectToLanding { to: "/dashboard".into() });
    assert_eq!(table.decide(&snap, "/reports"), RouteDecision::Render);
    assert_eq!(table.decide(&snap, "/cases/"), RouteDecision::Render);
    Ok(())
}

#[tokio::test]
async fn per_role_page_matrix() -> Result<()> {
    let table = RouteTable::dashboard(&AccessConfig::default());
    let matrix = [
        ("counsellor@school.edu", ["/dashboard", "/students", "/cases"].as_slice()),
        ("lead@school.edu", ["/dashboard", "/students", "/cases"].as_slice()),
        ("leadership@school.edu", ["/dashboard", "/cases", "/reports"].as_slice()),
        ("admin@school.edu", ["/dashboard", "/students", "/cases", "/reports", "/settings"].as_slice()),
    ];
    for (email, allowed) in matrix {
        let snap = signed_in(email).await?.snapshot();
        for path in ["/dashboard", "/students", "/cases", "/reports", "/settings"] {
            let rendered = table.decide(&snap, path) == RouteDecision::Render;
            assert_eq!(rendered, allowed.contains(&path), "{} {}", email, path);
        }
    }
    Ok(())
}

#[tokio::test]
async fn root_and_unknown_paths() -> Result<()> {
    let table = RouteTable::dashboard(&AccessConfig::default());
    let snap = signed_in("counsellor@school.edu").await?.snapshot();
    assert_eq!(table.decide(&snap, "/"), RouteDecision::Redirect { to: "/dashboard".into() });
    assert_eq!(table.decide(&snap, "/nowhere"), RouteDecision::NotFound);
    Ok(())
}

#[tokio::test]
async fn configured_paths_are_used() -> Result<()> {
    let config = AccessConfig { login_path: "/signin".into(), landing_path: "/home/".into(), ..AccessConfig::instant() };
    let table = RouteTable::dashboard(&config);

    let anon = SessionStore::demo(&config).snapshot();
    assert_eq!(table.decide(&anon, "/signin"), RouteDecision::Render);
    assert_eq!(
        table.decide(&anon, "/reports"),
        RouteDecision::RedirectToLogin { to: "/signin".into(), from: "/reports".into() }
    );

    let snap = signed_in("counsellor@school.edu").await?.snapshot();
    assert_eq!(table.decide(&snap, "/reports"), RouteDecision::RedirectToLanding { to: "/home".into() });
    Ok(())
}

#[tokio::test]
async fn logout_revokes_route_access() -> Result<()> {
    let table = RouteTable::dashboard(&AccessConfig::default());
    let store = signed_in("admin@school.edu").await?;
    assert_eq!(table.decide(&store.snapshot(), "/settings"), RouteDecision::Render);
    store.logout().await?;
    assert!(matches!(table.decide(&store.snapshot(), "/settings"), RouteDecision::RedirectToLogin { .. }));
    Ok(())
}

#[tokio::test]
async fn nav_items_per_role() -> Result<()> {
    let menu = NavMenu::dashboard();
    let expect = [
        ("counsellor@school.edu", vec!["Dashboard", "Students", "Cases"]),
        ("lead@school.edu", vec!["Dashboard", "Students", "Cases"]),
        ("leadership@school.edu", vec!["Dashboard", "Cases", "Reports"]),
        ("admin@school.edu", vec!["Dashboard", "Students", "Cases", "Reports", "Settings"]),
    ];
    for (email, titles) in expect {
        let store = signed_in(email).await?;
        let me = store.current_identity();
        let got: Vec<&str> = menu.visible(me.as_deref()).iter().map(|i| i.title.as_str()).collect();
        assert_eq!(got, titles, "{}", email);
        let admin_items = menu.visible_in(NavSection::Administration, me.as_deref());
        assert_eq!(admin_items.is_empty(), !email.starts_with("admin"));
    }
    Ok(())
}
