use serde_json::{json, Value};

use crate::drill_engine::Question;
use crate::levels::level_info;

/// Build the option list as `{ id, text }` objects, ids are option indexes.
fn options(q: &Question) -> Value {
    Value::Array(
        q.options
            .iter()
            .enumerate()
            .map(|(id, text)| json!({ "id": id, "text": text }))
            .collect(),
    )
}

/// Map a `Question` to the JSON payload a rendering client consumes.
///
/// `position` is zero-based within a batch of `total` questions. The client
/// scores a pick by comparing it with `correct_index`.
pub fn to_client_question(q: &Question, level_id: u32, position: usize, total: usize) -> Value {
    let level = level_info(level_id);

    json!({
        "type": "DrillQuestion",
        "question_id": q.question_id,
        "level": {
            "id": level_id,
            "name": level.map(|l| l.name),
            "description": level.map(|l| l.description),
        },
        "progress": {
            "position": position,
            "total": total,
            "label": format!("QUESTION {}/{}", position + 1, total),
        },
        "prompt": q.text,
        "mode": q.mode,
        "options": options(q),
        "correct_index": q.correct_index,
        "explanation": q.explanation,
    })
}
