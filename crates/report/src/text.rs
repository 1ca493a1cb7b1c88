use crate::analysis::AnalysisReport;
use crate::stats::sorted_desc;

const RULE: &str = "============================================================";

/// Plain-text summary written next to the JSON artifacts.
pub fn render_text_report(report: &AnalysisReport) -> String {
    let stats = &report.statistics;
    let focus = &report.focus.entity;
    let mut out = String::new();

    out.push_str(&format!("{} 知识图谱构建报告\n", focus));
    out.push_str(&format!("{}\n\n", RULE));
    out.push_str(&format!("文本长度: {} 字符\n", stats.text_length));
    out.push_str(&format!("识别实体: {} 个\n", stats.total_entities));
    out.push_str(&format!("抽取关系: {} 个\n", stats.total_relations));
    out.push_str(&format!("构建三元组: {} 个\n", stats.total_triples));
    out.push_str(&format!("{}相关三元组: {} 个\n", focus, stats.focus_triples));

    out.push_str("\n实体类型分布:\n");
    for (category, count) in sorted_desc(&stats.entity_types) {
        out.push_str(&format!("  {}: {}\n", category, count));
    }

    out.push_str("\n关系类型分布:\n");
    for (predicate, count) in sorted_desc(&stats.relation_types) {
        out.push_str(&format!("  {}: {}\n", predicate, count));
    }

    out.push_str("\n出现频率最高的实体:\n");
    for (i, entity) in report.top_entities.iter().enumerate() {
        out.push_str(&format!(
            "  {:2}. {}: {} 次 ({})\n",
            i + 1,
            entity.text,
            entity.count,
            entity.category
        ));
    }

    out.push_str("\n重要发现:\n");
    for finding in &report.findings {
        out.push_str(&format!("  • {}\n", finding));
    }

    let checklist = &report.checklist;
    out.push_str("\n关键知识检查:\n");
    for result in &checklist.results {
        let mark = if result.found { "✓" } else { "○" };
        let item = &result.item;
        let label = match &item.description {
            Some(desc) => format!("{}: ", desc),
            None => String::new(),
        };
        out.push_str(&format!(
            "  {} {}{} --[{}]--> {}\n",
            mark, label, item.subject, item.predicate, item.object
        ));
    }

    out.push_str(&format!(
        "\n知识发现率: {}/{} ({:.1}%)\n",
        checklist.found,
        checklist.total,
        checklist.rate * 100.0
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ReportGenerator;
    use crate::checklist::ChecklistItem;
    use extract::{Entity, Relation, TripleStore};

    #[test]
    fn test_render() {
        let entities = vec![
            Entity {
                text: "哪吒".to_string(),
                category: "神话人物".to_string(),
                count: 4,
            },
            Entity {
                text: "李靖".to_string(),
                category: "神话人物".to_string(),
                count: 1,
            },
        ];
        let relations = vec![Relation::new("哪吒", "父亲", "李靖")];
        let store = TripleStore::assemble(&relations, &entities);
        let checklist = vec![
            ChecklistItem::new("哪吒", "父亲", "李靖").described("家庭关系"),
            ChecklistItem::new("哪吒", "朋友", "敖丙"),
        ];
        let report = ReportGenerator::new("哪吒", checklist).generate(
            "李靖是哪吒的父亲",
            &entities,
            &relations,
            &store,
        );

        let text = render_text_report(&report);
        assert!(text.starts_with("哪吒 知识图谱构建报告\n"));
        assert!(text.contains("识别实体: 2 个"));
        assert!(text.contains("   1. 哪吒: 4 次 (神话人物)"));
        assert!(text.contains("  • 哪吒 的 父亲 是 李靖"));
        assert!(text.contains("  ✓ 家庭关系: 哪吒 --[父亲]--> 李靖"));
        assert!(text.contains("  ○ 哪吒 --[朋友]--> 敖丙"));
        assert!(text.contains("知识发现率: 1/2 (50.0%)"));
    }
}
