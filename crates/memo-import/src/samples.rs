//! Built-in sample memos for seeding an empty local store.

use chrono::{DateTime, Duration, Utc};

use memo_core::Memo;

struct Sample {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    created_days_ago: i64,
    updated_days_ago: i64,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        title: "Project meeting prep",
        content: "Prep for next Monday's 10am project kickoff:\n\n\
                  - Write the scope document\n\
                  - Split roles across the team\n\
                  - Draft the schedule\n\
                  - List required resources",
        category: "work",
        tags: &["meeting", "project", "prep"],
        created_days_ago: 2,
        updated_days_ago: 2,
    },
    Sample {
        id: "2",
        title: "Learning React 18 features",
        content: "# React 18 features\n\n\
                  ## Concurrent features\n\
                  - **Automatic batching**: several state updates handled as one\n\
                  - **Suspense improvements**: better UX for data fetching and code splitting\n\n\
                  ## New hooks\n\
                  ```javascript\nconst id = useId();\nconst deferredQuery = useDeferredValue(query);\n```\n\n\
                  ## Plan\n\
                  - [x] Read the official docs\n\
                  - [ ] Build a small example project\n\
                  - [ ] Apply it to an existing project",
        category: "study",
        tags: &["React", "learning", "dev"],
        created_days_ago: 5,
        updated_days_ago: 1,
    },
    Sample {
        id: "3",
        title: "App idea: habit tracker",
        content: "An app for daily habits:\n\n\
                  Core features:\n\
                  - Register and manage habits\n\
                  - Daily check-in\n\
                  - Progress charts\n\
                  - Goal reminders\n\
                  - Statistics\n\n\
                  Stack: React Native + Postgres\n\
                  Target launch: in 3 months",
        category: "idea",
        tags: &["app", "habits", "React Native"],
        created_days_ago: 7,
        updated_days_ago: 3,
    },
    Sample {
        id: "4",
        title: "Weekend trip plan",
        content: "Weekend trip:\n\n\
                  Saturday:\n\
                  - Morning: mountain hike\n\
                  - Afternoon: sunrise peak viewpoint\n\
                  - Evening: dinner at the local barbecue place\n\n\
                  Sunday:\n\
                  - Morning: island ferry\n\
                  - Afternoon: souvenir shopping\n\
                  - Evening: head to the airport\n\n\
                  Pack: hiking boots, camera, sunscreen",
        category: "personal",
        tags: &["travel", "weekend"],
        created_days_ago: 10,
        updated_days_ago: 8,
    },
    Sample {
        id: "5",
        title: "Reading list",
        content: "Books for this year:\n\n\
                  Development:\n\
                  - Clean Code (Robert C. Martin)\n\
                  - Refactoring, 2nd ed. (Martin Fowler)\n\
                  - System Design Interview (Alex Xu)\n\n\
                  Self-improvement:\n\
                  - Atomic Habits (James Clear)\n\n\
                  Fiction:\n\
                  - The Midnight Library (Matt Haig)",
        category: "personal",
        tags: &["reading", "books"],
        created_days_ago: 15,
        updated_days_ago: 15,
    },
    Sample {
        id: "6",
        title: "Performance tuning ideas",
        content: "# Web app performance\n\n\
                  ## Frontend\n\
                  - **WebP images**: 25-35% smaller than JPEG/PNG\n\
                  - **Lazy loading**: load only when in the viewport\n\
                  - Code splitting with `lazy(() => import('./LazyComponent'))`\n\n\
                  ## Backend\n\n\
                  | Approach | Impact | Effort |\n\
                  |----------|--------|--------|\n\
                  | Query tuning | high | medium |\n\
                  | CDN | high | low |\n\
                  | Caching | very high | high |\n\n\
                  > Track the Core Web Vitals",
        category: "idea",
        tags: &["performance", "optimization", "web"],
        created_days_ago: 20,
        updated_days_ago: 12,
    },
];

/// The sample memos, timestamped relative to `now`.
pub fn sample_memos(now: DateTime<Utc>) -> Vec<Memo> {
    SAMPLES
        .iter()
        .map(|s| Memo {
            id: s.id.to_string(),
            title: s.title.to_string(),
            content: s.content.to_string(),
            category: s.category.to_string(),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            created_at: now - Duration::days(s.created_days_ago),
            updated_at: now - Duration::days(s.updated_days_ago),
            ai_summary: None,
        })
        .collect()
}
