use anyhow::Result;
use portfolio_site::content::registry::PORTFOLIO_ITEMS;
use portfolio_site::render::page::page_file;
use portfolio_site::{ActiveCategory, LocalStorage, Page, SectionVisibility, SiteConfig};
use tempfile::TempDir;

#[tokio::test]
async fn test_every_category_view_is_written() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_string_lossy().into_owned();
    let storage = LocalStorage::new(output_path);
    let config = SiteConfig::default();

    for category in ActiveCategory::ALL {
        let page = Page::new(&config)
            .with_category(category)
            .with_visibility(SectionVisibility::all_visible());
        page.write_to(&storage).await?;
    }

    for category in ActiveCategory::ALL {
        let path = temp_dir.path().join(page_file(category));
        assert!(path.exists(), "{} missing", path.display());

        let html = std::fs::read_to_string(&path)?;
        assert!(html.starts_with("<!DOCTYPE html>"));
        let rendered = PORTFOLIO_ITEMS
            .iter()
            .filter(|item| html.contains(&format!("data-item-id=\"{}\"", item.id)))
            .count();
        let expected = PORTFOLIO_ITEMS
            .iter()
            .filter(|item| category.matches(item.category))
            .count();
        assert_eq!(rendered, expected, "wrong item count for {}", category);
    }
    Ok(())
}

#[test]
fn test_filter_links_point_at_sibling_pages() {
    let html = Page::new(&SiteConfig::default()).render();
    assert!(html.contains("href=\"index.html#portfolio\""));
    assert!(html.contains("href=\"portfolio-games.html#portfolio\""));
    assert!(html.contains("href=\"portfolio-art.html#portfolio\""));
    assert!(html.contains("href=\"portfolio-music.html#portfolio\""));
}

#[test]
fn test_cv_section_uses_configured_document() -> Result<()> {
    let config = SiteConfig::from_toml_str(
        r#"
[site]
cv_url = "/files/cv.pdf"
cv_download_name = "My_CV.pdf"
"#,
    )?;
    let html = Page::new(&config).render();

    assert!(html.contains("href=\"/files/cv.pdf\" download=\"My_CV.pdf\""));
    assert!(html.contains("View Online"));
    assert!(html.contains("Your CV download will start shortly."));
    Ok(())
}

#[test]
fn test_contact_form_posts_to_configured_relay() -> Result<()> {
    let config = SiteConfig::from_toml_str(
        r#"
[relay]
endpoint = "http://localhost:8025/"
service_id = "service_local"
owner_template_id = "template_owner"
auto_reply_template_id = "template_reply"
public_key = "local_key"
"#,
    )?;
    let html = Page::new(&config).render();

    assert!(html.contains("data-relay-url=\"http://localhost:8025/api/v1.0/email/send\""));
    assert!(html.contains("data-service-id=\"service_local\""));
    assert!(html.contains("data-owner-template=\"template_owner\""));
    assert!(html.contains("data-auto-reply-template=\"template_reply\""));
    assert!(html.contains("data-public-key=\"local_key\""));
    assert!(!html.contains("template_910vc0c"));
    Ok(())
}
