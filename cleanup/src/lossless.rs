use diffmatch_classifier::TextClassifier;
use tracing::trace;

use crate::diff::Diff;
use crate::diff::Operation;
use crate::diff::coalesce;
use crate::score::semantic_score;

/// Slide single edits surrounded by equalities onto the best boundary.
///
/// For `The c<ins>at c</ins>ame` the edit is moved to `The <ins>cat </ins>came`:
/// the text on both sides is unchanged, only where the cut falls. Each
/// candidate position is scored on both of its cuts with [`semantic_score`];
/// on a tie the rightmost position wins. Equalities emptied by the move are
/// removed from the script and the edits they separated are merged.
pub fn cleanup_semantic_lossless<C>(classifier: &C, diffs: &mut Vec<Diff>)
where
    C: TextClassifier + ?Sized,
{
    // Index of the edit under consideration; the script is modified in place.
    let mut pointer = 1;
    while pointer + 1 < diffs.len() {
        let flanked = diffs[pointer - 1].op == Operation::Equal
            && diffs[pointer + 1].op == Operation::Equal;
        if !flanked {
            pointer += 1;
            continue;
        }

        let mut equality1 = diffs[pointer - 1].text.clone();
        let mut edit = diffs[pointer].text.clone();
        let mut equality2 = diffs[pointer + 1].text.clone();

        // Shift the edit as far left as it will go.
        let offset = common_suffix_len(&equality1, &edit);
        if offset > 0 {
            let split = edit.len() - offset;
            let common = edit[split..].to_string();
            equality1.truncate(equality1.len() - offset);
            edit = format!("{common}{}", &edit[..split]);
            equality2.insert_str(0, &common);
        }

        // Then step right one char at a time, keeping the best position.
        let mut best_equality1 = equality1.clone();
        let mut best_edit = edit.clone();
        let mut best_equality2 = equality2.clone();
        let mut best_score = semantic_score(classifier, &equality1, &edit)
            + semantic_score(classifier, &edit, &equality2);
        while let (Some(head), Some(next)) = (edit.chars().next(), equality2.chars().next()) {
            if head != next {
                break;
            }
            let width = head.len_utf8();
            equality1.push(head);
            edit.drain(..width);
            edit.push(next);
            equality2.drain(..width);

            let score = semantic_score(classifier, &equality1, &edit)
                + semantic_score(classifier, &edit, &equality2);
            // `>=` favours trailing rather than leading whitespace on the edit.
            if score >= best_score {
                best_score = score;
                best_equality1.clone_from(&equality1);
                best_edit.clone_from(&edit);
                best_equality2.clone_from(&equality2);
            }
        }

        if diffs[pointer - 1].text != best_equality1 {
            trace!(
                from = diffs[pointer - 1].text.len(),
                to = best_equality1.len(),
                score = best_score,
                "shifted edit boundary"
            );
            if best_equality1.is_empty() {
                diffs.remove(pointer - 1);
                pointer -= 1;
            } else {
                diffs[pointer - 1].text = best_equality1;
            }
            diffs[pointer].text = best_edit;
            if best_equality2.is_empty() {
                diffs.remove(pointer + 1);
                // The flanks cannot both empty: their combined length is fixed.
                pointer = pointer.saturating_sub(1);
            } else {
                diffs[pointer + 1].text = best_equality2;
            }
        }
        pointer += 1;
    }
    coalesce(diffs);
}

/// Byte length of the longest common char suffix of `a` and `b`.
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(c, _)| c.len_utf8())
        .sum()
}
