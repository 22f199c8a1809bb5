//! Menu model: platform menu catalog, per-portfolio menu instances,
//! menu blocks and their reconciliation.
//!
//! A `PlatformMenu` defines what kind of section can exist (globally,
//! super-admin managed). A `PortfolioMenu` is one portfolio's instance of
//! it, carrying a draft state (`visible`, `order`) and the last-published
//! snapshot (`published_visible`, `published_order`). Component-based
//! menus additionally hold one `MenuBlock` per component slot.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::MAX_MENU_KEY_LEN;
use crate::errors::{AppError, AppResult};

/// Section types with a registered admin editor.
///
/// A platform menu is renderable when its section type has an editor or
/// its component key list is non-empty; everything else has no admin
/// surface and cannot be made visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Skills,
    Projects,
    Experience,
    About,
    Architecture,
    Contact,
    Hero,
}

impl SectionType {
    /// All shipped section types have a registered editor.
    pub fn has_editor(&self) -> bool {
        true
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Skills => "skills",
            SectionType::Projects => "projects",
            SectionType::Experience => "experience",
            SectionType::About => "about",
            SectionType::Architecture => "architecture",
            SectionType::Contact => "contact",
            SectionType::Hero => "hero",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "skills" => Some(SectionType::Skills),
            "projects" => Some(SectionType::Projects),
            "experience" => Some(SectionType::Experience),
            "about" => Some(SectionType::About),
            "architecture" => Some(SectionType::Architecture),
            "contact" => Some(SectionType::Contact),
            "hero" => Some(SectionType::Hero),
            _ => None,
        }
    }
}

/// Recognized UI component identifiers for component-based menus.
pub const COMPONENT_KEYS: &[&str] = &[
    "title",
    "subtitle",
    "rich_text",
    "image",
    "gallery",
    "link_list",
    "cta",
    "file_attachment",
];

pub fn is_recognized_component(key: &str) -> bool {
    COMPONENT_KEYS.contains(&key)
}

static MENU_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("menu key regex"));

/// Validate a platform menu key: lowercase `[a-z0-9_-]+`, bounded length.
/// Keys are immutable after creation; uniqueness is enforced by storage.
pub fn validate_menu_key(key: &str) -> AppResult<()> {
    if key.is_empty() || key.len() > MAX_MENU_KEY_LEN {
        return Err(AppError::validation(format!(
            "Menu key must be between 1 and {} characters (got {})",
            MAX_MENU_KEY_LEN,
            key.len()
        )));
    }
    if !MENU_KEY_RE.is_match(key) {
        return Err(AppError::validation(
            "Menu key may only contain lowercase letters, digits, '_' and '-'",
        ));
    }
    Ok(())
}

/// Validate a component key list for a platform menu.
pub fn validate_component_keys(keys: &[String]) -> AppResult<()> {
    if keys.is_empty() {
        return Err(AppError::validation(
            "Component-based menus require at least one component key",
        ));
    }
    for key in keys {
        if !is_recognized_component(key) {
            return Err(AppError::validation(format!(
                "Unrecognized component key: {}",
                key
            )));
        }
    }
    Ok(())
}

/// Platform-wide menu definition (global catalog entry).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlatformMenu {
    pub id: Uuid,
    pub key: String,
    pub label: String,
    pub section_type: Option<SectionType>,
    pub component_keys: Vec<String>,
    pub order: i32,
    pub enabled: bool,
}

impl PlatformMenu {
    /// A menu is renderable when something can actually edit and render
    /// it: a registered section editor or at least one component slot.
    pub fn is_renderable(&self) -> bool {
        self.section_type.map(|s| s.has_editor()).unwrap_or(false)
            || !self.component_keys.is_empty()
    }

    /// Check whether a portfolio instance of this menu may be made
    /// visible. Platform-level disablement always wins.
    pub fn check_visibility_allowed(&self) -> AppResult<()> {
        if !self.enabled {
            return Err(AppError::validation(format!(
                "Menu '{}' is disabled platform-wide and cannot be made visible",
                self.key
            )));
        }
        if !self.is_renderable() {
            return Err(AppError::validation(format!(
                "Menu '{}' has no registered editor or components and cannot be made visible",
                self.key
            )));
        }
        Ok(())
    }
}

/// One portfolio's instance of a platform menu.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PortfolioMenu {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    /// Draft state, edited in the admin UI
    pub visible: bool,
    pub order: i32,
    /// Snapshot taken by the last publish; this is what the public page renders
    pub published_visible: bool,
    pub published_order: i32,
}

/// Portfolio menu joined with its platform definition, as the admin UI
/// consumes it. Platform-disabled instances are included so the client
/// can explain why a section is unavailable.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PortfolioMenuView {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub platform_menu_id: Uuid,
    pub key: String,
    pub label: String,
    pub section_type: Option<SectionType>,
    pub component_keys: Vec<String>,
    pub visible: bool,
    pub order: i32,
    pub published_visible: bool,
    pub published_order: i32,
    pub platform_enabled: bool,
    pub renderable: bool,
}

/// One content slot inside a component-based menu.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuBlock {
    pub id: Uuid,
    pub portfolio_menu_id: Uuid,
    pub component_key: String,
    pub order: i32,
    pub data: BlockData,
}

/// Typed block payloads, tagged by component key.
///
/// Malformed block data is rejected at the service boundary instead of
/// being stored as loose JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum BlockData {
    Title { text: String },
    Subtitle { text: String },
    RichText { body: String },
    Image { url: String, alt: String },
    Gallery { urls: Vec<String> },
    LinkList { links: Vec<BlockLink> },
    Cta { label: String, url: String },
    FileAttachment { url: String, label: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BlockLink {
    pub label: String,
    pub url: String,
}

impl BlockData {
    /// The empty payload a freshly created slot starts with.
    pub fn empty_for(component_key: &str) -> AppResult<Self> {
        match component_key {
            "title" => Ok(BlockData::Title { text: String::new() }),
            "subtitle" => Ok(BlockData::Subtitle { text: String::new() }),
            "rich_text" => Ok(BlockData::RichText { body: String::new() }),
            "image" => Ok(BlockData::Image {
                url: String::new(),
                alt: String::new(),
            }),
            "gallery" => Ok(BlockData::Gallery { urls: Vec::new() }),
            "link_list" => Ok(BlockData::LinkList { links: Vec::new() }),
            "cta" => Ok(BlockData::Cta {
                label: String::new(),
                url: String::new(),
            }),
            "file_attachment" => Ok(BlockData::FileAttachment {
                url: String::new(),
                label: String::new(),
            }),
            other => Err(AppError::validation(format!(
                "Unrecognized component key: {}",
                other
            ))),
        }
    }

    /// Length-check every text field against its category ceiling.
    pub fn validate(&self) -> AppResult<()> {
        use crate::domain::limits::{check_each_len, check_len, FieldKind};

        match self {
            BlockData::Title { text } | BlockData::Subtitle { text } => {
                check_len("text", FieldKind::Title, text)
            }
            BlockData::RichText { body } => check_len("body", FieldKind::LongText, body),
            BlockData::Image { url, alt } => {
                check_len("url", FieldKind::Url, url)?;
                check_len("alt", FieldKind::Title, alt)
            }
            BlockData::Gallery { urls } => check_each_len("urls", FieldKind::Url, urls),
            BlockData::LinkList { links } => {
                for (i, link) in links.iter().enumerate() {
                    check_len(&format!("links[{}].label", i), FieldKind::Name, &link.label)?;
                    check_len(&format!("links[{}].url", i), FieldKind::Url, &link.url)?;
                }
                Ok(())
            }
            BlockData::Cta { label, url } | BlockData::FileAttachment { url, label } => {
                check_len("label", FieldKind::Name, label)?;
                check_len("url", FieldKind::Url, url)
            }
        }
    }

    /// The component key this payload belongs to.
    pub fn component_key(&self) -> &'static str {
        match self {
            BlockData::Title { .. } => "title",
            BlockData::Subtitle { .. } => "subtitle",
            BlockData::RichText { .. } => "rich_text",
            BlockData::Image { .. } => "image",
            BlockData::Gallery { .. } => "gallery",
            BlockData::LinkList { .. } => "link_list",
            BlockData::Cta { .. } => "cta",
            BlockData::FileAttachment { .. } => "file_attachment",
        }
    }
}

/// Plan for reconciling one portfolio menu's blocks after a platform
/// menu's component key list changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockReconciliation {
    /// Existing blocks that survive, with their new order index.
    /// Identity is the component key, so `data` is preserved.
    pub reorder: Vec<(Uuid, i32)>,
    /// Blocks whose component key was removed.
    pub delete: Vec<Uuid>,
    /// Fresh empty slots: (component key, order index).
    pub create: Vec<(String, i32)>,
}

impl BlockReconciliation {
    pub fn is_noop(&self) -> bool {
        self.delete.is_empty() && self.create.is_empty() && self.reorder.is_empty()
    }
}

/// Compute the block reconciliation for one portfolio menu.
///
/// `existing` is (block id, component key) in any order. Surviving blocks
/// are matched by component key (first occurrence wins for duplicate
/// keys, which storage does not produce). Applying the plan must use the
/// two-phase high-offset technique so intermediate states never violate
/// the unique (portfolio_menu_id, order) constraint.
pub fn plan_block_reconciliation(
    existing: &[(Uuid, String)],
    new_keys: &[String],
) -> BlockReconciliation {
    let mut plan = BlockReconciliation::default();
    let mut claimed: Vec<bool> = vec![false; existing.len()];

    for (index, key) in new_keys.iter().enumerate() {
        let slot = existing
            .iter()
            .enumerate()
            .find(|(i, (_, k))| !claimed[*i] && k == key);
        match slot {
            Some((i, (id, _))) => {
                claimed[i] = true;
                plan.reorder.push((*id, index as i32));
            }
            None => plan.create.push((key.clone(), index as i32)),
        }
    }

    for (i, (id, _)) in existing.iter().enumerate() {
        if !claimed[i] {
            plan.delete.push(*id);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_key_format() {
        assert!(validate_menu_key("testimonials").is_ok());
        assert!(validate_menu_key("my-menu_2").is_ok());
        assert!(validate_menu_key("").is_err());
        assert!(validate_menu_key("Upper").is_err());
        assert!(validate_menu_key("has space").is_err());
        assert!(validate_menu_key(&"x".repeat(65)).is_err());
        assert!(validate_menu_key(&"x".repeat(64)).is_ok());
    }

    #[test]
    fn component_keys_must_be_recognized_and_non_empty() {
        assert!(validate_component_keys(&[]).is_err());
        assert!(validate_component_keys(&["title".into(), "rich_text".into()]).is_ok());
        let err = validate_component_keys(&["hologram".into()]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn disabled_platform_menu_blocks_visibility() {
        let menu = PlatformMenu {
            id: Uuid::new_v4(),
            key: "skills".into(),
            label: "Skills".into(),
            section_type: Some(SectionType::Skills),
            component_keys: vec![],
            order: 0,
            enabled: false,
        };
        assert!(matches!(
            menu.check_visibility_allowed().unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn non_renderable_menu_blocks_visibility() {
        let menu = PlatformMenu {
            id: Uuid::new_v4(),
            key: "mystery".into(),
            label: "Mystery".into(),
            section_type: None,
            component_keys: vec![],
            order: 0,
            enabled: true,
        };
        assert!(!menu.is_renderable());
        assert!(menu.check_visibility_allowed().is_err());
    }

    #[test]
    fn editor_or_components_make_menu_renderable() {
        let with_editor = PlatformMenu {
            id: Uuid::new_v4(),
            key: "about".into(),
            label: "About".into(),
            section_type: Some(SectionType::About),
            component_keys: vec![],
            order: 0,
            enabled: true,
        };
        assert!(with_editor.check_visibility_allowed().is_ok());

        let with_components = PlatformMenu {
            id: Uuid::new_v4(),
            key: "testimonials".into(),
            label: "Testimonials".into(),
            section_type: None,
            component_keys: vec!["title".into()],
            order: 0,
            enabled: true,
        };
        assert!(with_components.check_visibility_allowed().is_ok());
    }

    #[test]
    fn reconciliation_preserves_surviving_keys_by_identity() {
        // [A, B] -> [B, C]: B keeps its block (and data), A's block is
        // deleted, C gets a fresh slot.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let existing = vec![(a, "title".to_string()), (b, "rich_text".to_string())];
        let plan = plan_block_reconciliation(
            &existing,
            &["rich_text".to_string(), "image".to_string()],
        );

        assert_eq!(plan.reorder, vec![(b, 0)]);
        assert_eq!(plan.delete, vec![a]);
        assert_eq!(plan.create, vec![("image".to_string(), 1)]);
    }

    #[test]
    fn reconciliation_pure_reorder() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let existing = vec![(a, "title".to_string()), (b, "rich_text".to_string())];
        let plan = plan_block_reconciliation(
            &existing,
            &["rich_text".to_string(), "title".to_string()],
        );

        assert_eq!(plan.reorder, vec![(b, 0), (a, 1)]);
        assert!(plan.delete.is_empty());
        assert!(plan.create.is_empty());
    }

    #[test]
    fn reconciliation_from_empty() {
        let plan = plan_block_reconciliation(&[], &["title".to_string(), "cta".to_string()]);
        assert_eq!(
            plan.create,
            vec![("title".to_string(), 0), ("cta".to_string(), 1)]
        );
        assert!(plan.reorder.is_empty());
        assert!(plan.delete.is_empty());
    }

    #[test]
    fn empty_block_data_matches_component_key() {
        for key in COMPONENT_KEYS {
            let data = BlockData::empty_for(key).unwrap();
            assert_eq!(data.component_key(), *key);
        }
        assert!(BlockData::empty_for("nope").is_err());
    }
}
