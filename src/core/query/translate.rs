//! Literal translation of non-English keywords.
//!
//! Queries typed in Thai, Chinese or Japanese are rewritten to English
//! before tokenization so they can hit an English corpus. Matching is a
//! plain substring replacement; no segmentation is attempted.

use once_cell::sync::Lazy;

/// Built-in foreign phrase to English phrase pairs, in application order.
const BUILTIN_TRANSLATIONS: &[(&str, &str)] = &[
    // Thai
    ("สวย", "beautiful elegant"),
    ("เรียบ", "minimal clean simple"),
    ("หรู", "luxury premium elegant"),
    ("ทันสมัย", "modern contemporary"),
    ("มืด", "dark dark-mode"),
    ("สว่าง", "light bright"),
    ("สี", "color palette"),
    ("ฟอนต์", "font typography"),
    ("ปุ่ม", "button cta"),
    ("หน้าแรก", "landing homepage hero"),
    ("แดชบอร์ด", "dashboard admin panel"),
    ("ร้านค้า", "ecommerce shop store"),
    ("สุขภาพ", "healthcare medical health"),
    ("อาหาร", "food restaurant"),
    ("การศึกษา", "education learning"),
    ("เกม", "gaming game"),
    ("การเงิน", "fintech finance banking"),
    ("ท่องเที่ยว", "travel tourism"),
    ("อสังหา", "real-estate property"),
    ("ความงาม", "beauty spa wellness"),
    ("เทคโนโลยี", "technology tech startup"),
    ("แอนิเมชัน", "animation motion"),
    ("ไอคอน", "icon icons svg"),
    ("ตาราง", "table grid data"),
    ("ฟอร์ม", "form input"),
    ("การ์ด", "card component"),
    ("เมนู", "navbar menu navigation"),
    // Chinese
    ("美观", "beautiful elegant"),
    ("简约", "minimal clean simple"),
    ("奢华", "luxury premium"),
    ("现代", "modern contemporary"),
    ("暗色", "dark dark-mode"),
    ("配色", "color palette"),
    ("字体", "font typography"),
    ("按钮", "button cta"),
    ("首页", "landing homepage"),
    ("仪表盘", "dashboard admin"),
    ("电商", "ecommerce shop"),
    ("医疗", "healthcare medical"),
    ("教育", "education learning"),
    ("游戏", "gaming game"),
    ("金融", "fintech finance"),
    ("动画", "animation motion"),
    ("图标", "icon icons"),
    // Japanese
    ("美しい", "beautiful elegant"),
    ("シンプル", "minimal clean simple"),
    ("高級", "luxury premium"),
    ("モダン", "modern contemporary"),
    ("ダーク", "dark dark-mode"),
    ("カラー", "color palette"),
    ("フォント", "font typography"),
    ("ボタン", "button cta"),
    ("ランディング", "landing homepage"),
    ("ダッシュボード", "dashboard admin"),
    ("ショップ", "ecommerce shop"),
    ("ゲーム", "gaming game"),
    ("アニメーション", "animation motion"),
    ("アイコン", "icon icons"),
];

static BUILTIN: Lazy<TranslationTable> =
    Lazy::new(|| TranslationTable::from_pairs(BUILTIN_TRANSLATIONS.iter().copied()));

/// Ordered foreign-phrase to English-phrase substitution table.
///
/// Substitutions are applied one after another in table order, each
/// against the output of the previous one.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    pairs: Vec<(String, String)>,
}

impl TranslationTable {
    /// Build a table from pairs in the order they should be applied
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .filter(|(foreign, _)| !foreign.is_empty())
                .map(|(foreign, english)| (foreign.to_string(), english.to_string()))
                .collect(),
        }
    }

    /// The process-wide built-in table
    pub fn builtin() -> &'static TranslationTable {
        &BUILTIN
    }

    /// Replace every known foreign phrase in `query` with its English phrase.
    ///
    /// A query containing none of the table's phrases is returned unchanged.
    pub fn translate(&self, query: &str) -> String {
        let mut translated = query.to_string();
        for (foreign, english) in &self.pairs {
            if translated.contains(foreign.as_str()) {
                translated = translated.replace(foreign.as_str(), english);
            }
        }
        translated
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
