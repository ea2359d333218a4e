//! Repair pass for session state after durable-state mutations.

use crate::engine::state::{DomainState, GeneratorState, PersistedState, QuizPlayState};

/// Rebuild `domain.*` so every id it references resolves against the
/// durable collections.
///
/// Invoked after every mutation of `persisted.students` or
/// `persisted.quizzes`; running it on already-consistent state is a no-op.
/// Presence in the roster is the only criterion here — excluded students
/// keep their place in the used histories, since eligibility is filtered
/// at draw time, not at prune time.
pub fn prune_domain(persisted: &PersistedState, domain: DomainState) -> DomainState {
    DomainState {
        generator: prune_generator(persisted, domain.generator),
        quiz_play: prune_quiz_play(persisted, domain.quiz_play),
    }
}

fn prune_generator(persisted: &PersistedState, mut generator: GeneratorState) -> GeneratorState {
    let in_roster = |id: &str| persisted.students.iter().any(|s| s.id == id);
    generator.used_student_ids.retain(|id| in_roster(id));
    if let Some(current) = &generator.current_student_id {
        if !in_roster(current) {
            generator.current_student_id = None;
        }
    }
    generator
}

fn prune_quiz_play(persisted: &PersistedState, mut play: QuizPlayState) -> QuizPlayState {
    // An unresolvable selection invalidates the whole session.
    let quiz = match play
        .selected_quiz_id
        .as_ref()
        .and_then(|id| persisted.quizzes.get(id))
    {
        Some(quiz) => quiz,
        None => return QuizPlayState::default(),
    };

    let has_question = |id: &str| quiz.questions.iter().any(|q| q.id == id);
    let in_roster = |id: &str| persisted.students.iter().any(|s| s.id == id);

    play.used_question_ids.retain(|id| has_question(id));
    play.used_student_ids.retain(|id| in_roster(id));
    if play
        .current_question_id
        .as_deref()
        .is_some_and(|id| !has_question(id))
    {
        play.current_question_id = None;
    }
    if play
        .current_student_id
        .as_deref()
        .is_some_and(|id| !in_roster(id))
    {
        play.current_student_id = None;
    }
    if play.current_question_id.is_none() {
        play.answer_revealed = false;
    }
    play
}
