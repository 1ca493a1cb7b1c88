//! Built-in vocabulary for the Nezha corpus.

use crate::catalog::EntityCatalog;
use crate::rules::RuleSpec;
use crate::schema::Relation;

pub const FOCUS_ENTITY: &str = "哪吒";

pub fn catalog() -> EntityCatalog {
    EntityCatalog::new()
        .with_category(
            "神话人物",
            [
                "哪吒", "李靖", "殷夫人", "太乙真人", "敖丙", "申公豹", "无量仙翁", "玉皇大帝",
                "龙王", "东海龙王",
            ],
        )
        .with_category("创作者", ["吴承恩", "许仲琳", "饺子", "乌尔善"])
        .with_category("学者", ["焦杰", "付方彦", "程国赋", "张茗", "李妙然"])
        .with_category(
            "作品",
            [
                "《封神演义》",
                "《西游记》",
                "《哪吒之魔童降世》",
                "《哪吒之魔童闹海》",
                "《大闹天宫》",
                "《哪吒闹海》",
            ],
        )
        .with_category(
            "概念",
            [
                "魔丸", "灵珠", "乾坤圈", "风火轮", "火尖枪", "混天绫", "我命由我不由天", "神化",
                "人化",
            ],
        )
        .with_category(
            "时间",
            [
                "唐代", "宋代", "元代", "明代", "1961年", "1979年", "2019年", "2025年",
            ],
        )
}

pub fn rule_specs() -> Vec<RuleSpec> {
    vec![
        // creation
        RuleSpec::new(r"([^，。]+?)创作《([^》]+)》", "创作"),
        RuleSpec::new(r"([^，。]+?)编写《([^》]+)》", "创作"),
        // kinship
        RuleSpec::new(r"([^，。]+?)是([^，。]+?)的父亲", "父亲"),
        RuleSpec::new(r"([^，。]+?)是([^，。]+?)的母亲", "母亲"),
        // master and disciple
        RuleSpec::new(r"([^，。]+?)是([^，。]+?)的师父", "师父"),
        // adaptation
        RuleSpec::new(r"《([^》]+)》改编自《([^》]+)》", "改编自"),
        // research
        RuleSpec::new(r"([^，。]+?)研究([^，。]+?)", "研究"),
        RuleSpec::new(r"([^，。]+?)分析([^，。]+?)", "研究"),
        // enemies and friends
        RuleSpec::new(r"([^，。]+?)与([^，。]+?)是敌人", "敌人"),
        RuleSpec::new(r"([^，。]+?)与([^，。]+?)是朋友", "朋友"),
    ]
}

pub fn known_relations() -> Vec<Relation> {
    vec![
        Relation::new("哪吒", "父亲", "李靖"),
        Relation::new("哪吒", "师父", "太乙真人"),
        Relation::new("吴承恩", "创作", "《西游记》"),
        Relation::new("许仲琳", "创作", "《封神演义》"),
        Relation::new("饺子", "导演", "《哪吒之魔童降世》"),
        Relation::new("哪吒", "出现于", "《封神演义》"),
        Relation::new("《哪吒之魔童降世》", "改编自", "《封神演义》"),
    ]
}
