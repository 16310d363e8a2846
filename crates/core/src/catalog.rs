//! Built-in training content: a 12-week beginner run/walk schedule and a
//! small library of strength exercises.

use crate::model::{Exercise, ExerciseLibrary, MuscleGroup, Phase, Session, TrainingPlan, Week};

struct PhaseDef {
    title: &'static str,
    weeks: &'static [WeekDef],
}

struct WeekDef {
    number: u32,
    // (id, category, description)
    sessions: &'static [(&'static str, &'static str, &'static str)],
}

const RUN_WALK: &str = "Run/Walk";
const RECOVERY: &str = "Active Recovery or Strength";
const OPTIONAL_RUN: &str = "Optional Run";
const CONTINUOUS_RUN: &str = "Continuous Run";

const PLAN: &[PhaseDef] = &[
    PhaseDef {
        title: "Phase 1: Foundation & Form (Weeks 1-4)",
        weeks: &[
            WeekDef {
                number: 1,
                sessions: &[
                    ("w1s1", RUN_WALK, "15 min: 1 min run (Green), 3 min walk. Repeat 3x."),
                    ("w1s2", RECOVERY, "20 min walk or Strength Session"),
                ],
            },
            WeekDef {
                number: 2,
                sessions: &[
                    ("w2s1", RUN_WALK, "16 min: 1 min run (Green), 3 min walk. Repeat 4x."),
                    ("w2s2", RECOVERY, "20 min walk or Strength Session"),
                ],
            },
            WeekDef {
                number: 3,
                sessions: &[
                    ("w3s1", RUN_WALK, "20 min: 2 min run (Green), 3 min walk. Repeat 4x."),
                    ("w3s2", RECOVERY, "25 min walk or Strength Session"),
                ],
            },
            WeekDef {
                number: 4,
                sessions: &[
                    ("w4s1", RUN_WALK, "21 min: 2 min run (Green), 2 min walk. Repeat 5x."),
                    ("w4s2", RECOVERY, "25 min walk or Strength Session"),
                ],
            },
        ],
    },
    PhaseDef {
        title: "Phase 2: Building Endurance (Weeks 5-8)",
        weeks: &[
            WeekDef {
                number: 5,
                sessions: &[
                    ("w5s1", RUN_WALK, "24 min: 3 min run (Green), 2 min walk. Repeat 5x."),
                    ("w5s2", RECOVERY, "30 min walk or Strength Session"),
                ],
            },
            WeekDef {
                number: 6,
                sessions: &[
                    ("w6s1", RUN_WALK, "28 min: 4 min run (Green), 2 min walk. Repeat 4x."),
                    ("w6s2", RECOVERY, "30 min walk or Strength Session"),
                ],
            },
            WeekDef {
                number: 7,
                sessions: &[
                    ("w7s1", RUN_WALK, "30 min: 5 min run (Green), 2 min walk. Repeat 4x."),
                    ("w7s2", RECOVERY, "30 min walk or Strength Session"),
                ],
            },
            WeekDef {
                number: 8,
                sessions: &[
                    ("w8s1", RUN_WALK, "32 min: 6 min run (Green), 2 min walk. Repeat 4x."),
                    ("w8s2", RECOVERY, "30 min walk or Strength Session"),
                ],
            },
        ],
    },
    PhaseDef {
        title: "Phase 3: Consistent Running (Weeks 9-12)",
        weeks: &[
            WeekDef {
                number: 9,
                sessions: &[
                    ("w9s1", RUN_WALK, "20 min: 8 min run (Green), 2 min walk. Repeat 2x."),
                    ("w9s2", OPTIONAL_RUN, "15-20 min easy run (Green)"),
                ],
            },
            WeekDef {
                number: 10,
                sessions: &[
                    ("w10s1", RUN_WALK, "24 min: 10 min run (Green), 2 min walk. Repeat 2x."),
                    ("w10s2", OPTIONAL_RUN, "20 min easy run (Green)"),
                ],
            },
            WeekDef {
                number: 11,
                sessions: &[
                    ("w11s1", CONTINUOUS_RUN, "20 min continuous easy run (Green)."),
                    ("w11s2", OPTIONAL_RUN, "20-25 min easy run (Green)"),
                ],
            },
            WeekDef {
                number: 12,
                sessions: &[
                    ("w12s1", CONTINUOUS_RUN, "25 min continuous easy run (Green)."),
                    ("w12s2", OPTIONAL_RUN, "Celebrate with a 5k walk or run/walk!"),
                ],
            },
        ],
    },
];

const EXERCISES: &[(MuscleGroup, &str, &str)] = &[
    (
        MuscleGroup::Core,
        "Pelvic Tilt",
        "Lie on your back with knees bent. Gently flatten your back against the floor by tightening your stomach muscles.",
    ),
    (
        MuscleGroup::Core,
        "Glute Bridge",
        "Lie on your back with knees bent. Lift your hips off the floor until your body forms a straight line from your shoulders to your knees.",
    ),
    (
        MuscleGroup::Core,
        "Modified Plank",
        "Start on all fours, then walk your hands forward and lower your hips to form a straight line from your head to your knees. Hold this position.",
    ),
    (
        MuscleGroup::Core,
        "Bird-Dog",
        "Start on all fours. Extend one arm straight forward and the opposite leg straight back, keeping your back flat. Return to the start and switch sides.",
    ),
    (
        MuscleGroup::LowerBody,
        "Bodyweight Squat",
        "Stand with feet shoulder-width apart. Lower your hips as if sitting in a chair, keeping your chest up and back straight.",
    ),
    (
        MuscleGroup::LowerBody,
        "Lunge",
        "Step forward with one leg and lower your hips until both knees are bent at a 90-degree angle.",
    ),
    (
        MuscleGroup::UpperBody,
        "Wall Push-up",
        "Stand facing a wall, a little farther than arm's length away. Place your hands on the wall and bend your elbows to bring your chest toward the wall.",
    ),
    (
        MuscleGroup::UpperBody,
        "Inverted Row",
        "Lie under a sturdy table. Grab the edge with both hands and pull your chest up toward the table.",
    ),
];

/// The built-in training schedule.
///
/// # Panics
///
/// Panics if the compiled-in tables violate plan invariants (covered by tests).
#[must_use]
pub fn default_plan() -> TrainingPlan {
    let phases = PLAN
        .iter()
        .map(|phase| {
            let weeks = phase
                .weeks
                .iter()
                .map(|week| {
                    let sessions = week
                        .sessions
                        .iter()
                        .map(|(id, category, task)| Session::new(*id, *category, *task))
                        .collect();
                    Week::new(week.number, sessions)
                })
                .collect();
            Phase::new(phase.title, weeks)
        })
        .collect();

    TrainingPlan::new(phases).expect("built-in plan should be valid")
}

/// The built-in exercise library.
#[must_use]
pub fn default_exercises() -> ExerciseLibrary {
    ExerciseLibrary::new(
        EXERCISES
            .iter()
            .map(|(group, name, how_to)| Exercise::new(*group, *name, *how_to))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompletionStore;
    use crate::stats::adherence_split;

    #[test]
    fn plan_has_twelve_weeks_of_two_sessions() {
        let plan = default_plan();
        assert_eq!(plan.phases().len(), 3);
        assert_eq!(plan.week_count(), 12);
        assert_eq!(plan.session_count(), 24);
        assert!(plan.weeks().iter().all(|w| w.len() == 2));

        let numbers: Vec<u32> = plan.weeks().iter().map(Week::number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn session_ids_follow_week_pattern() {
        let plan = default_plan();
        for week in plan.weeks() {
            for (idx, session) in week.sessions().iter().enumerate() {
                let expected = format!("w{}s{}", week.number(), idx + 1);
                assert_eq!(session.id().as_str(), expected);
            }
        }
    }

    #[test]
    fn no_builtin_category_is_a_key_session() {
        let plan = default_plan();
        assert!(plan.sessions().all(|s| !s.category().starts_with("Key")));

        let all_done: CompletionStore = plan.sessions().map(|s| (s.id().clone(), true)).collect();
        let split = adherence_split(plan.sessions(), &all_done);
        assert_eq!(split.key, 0);
        assert_eq!(split.other, 24);
    }

    #[test]
    fn exercises_cover_three_groups() {
        let library = default_exercises();
        assert_eq!(library.len(), 8);
        let groups: Vec<MuscleGroup> = library.by_group().into_iter().map(|(g, _)| g).collect();
        assert_eq!(
            groups,
            vec![MuscleGroup::Core, MuscleGroup::LowerBody, MuscleGroup::UpperBody]
        );
    }
}
