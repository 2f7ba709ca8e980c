use crate::types::{RenameEntry, RenamePlan};
use std::path::Path;

pub const DEFAULT_BASE_DIR: &str = r"E:\Dev\2026-02-06 - NovelWriter-Rus\other\小说提示词";

const MBTI: &str = "MBTI";
const CHARACTER_TEMPLATE: &str = "MBTI+人设模板";
const LONG_SPEAR: &str = "MBTI+长矛人设";
const KNOWLEDGE_BASE: &str = "gen+知识库3.1";

// (directory, old name, new name). Files first, then the directories that
// hold them, so the file entries still see the original directory names.
const FILE_RENAMES: &[(&str, &str, &str)] = &[
    (MBTI, "初始(1).txt", "Initial(1).txt"),
    (MBTI, "续写(1).txt", "Continue(1).txt"),
    (
        CHARACTER_TEMPLATE,
        "个人文风分析师（个人语料与表达指纹）.txt",
        "PersonalStyleAnalyzer.txt",
    ),
    (CHARACTER_TEMPLATE, "初始(1).txt", "Initial(1).txt"),
    (
        CHARACTER_TEMPLATE,
        "真人感写作指南模版.txt",
        "AuthenticWritingGuideTemplate.txt",
    ),
    (CHARACTER_TEMPLATE, "续写(1).txt", "Continue(1).txt"),
    (LONG_SPEAR, "初始(1).txt", "Initial(1).txt"),
    (LONG_SPEAR, "真人感写作指南.txt", "AuthenticWritingGuide.txt"),
    (LONG_SPEAR, "续写(1).txt", "Continue(1).txt"),
    (KNOWLEDGE_BASE, "核心指令.txt", "CoreInstructions.txt"),
];

const DIRECTORY_RENAMES: &[(&str, &str)] = &[
    (KNOWLEDGE_BASE, "gen+KnowledgeBase3.1"),
    (CHARACTER_TEMPLATE, "MBTI+CharacterTemplate"),
    (LONG_SPEAR, "MBTI+LongSpearCharacter"),
];

/// The prompt-collection renames rooted at `base`.
pub fn builtin_plan(base: &Path) -> RenamePlan {
    let files = FILE_RENAMES.iter().map(|(dir, old, new)| {
        let dir = base.join(dir);
        RenameEntry::new(dir.join(old), dir.join(new))
    });
    let dirs = DIRECTORY_RENAMES
        .iter()
        .map(|(old, new)| RenameEntry::new(base.join(old), base.join(new)));

    files.chain(dirs).collect()
}
