// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static reference guides. Fixed content, no network.

/// Bite and sting first-aid reference.
pub const SAFETY_GUIDE: &str = "\
Bite & Sting Safety Guide
Essential first aid and identification for common insect bites.

Bee & Wasp Stings
  - Remove stinger immediately by scraping (don't pinch).
  - Wash area with soap and water.
  - Apply ice pack to reduce swelling.
  ! Seek emergency help if allergic (difficulty breathing).

Spider Bites
  - Clean the bite area thoroughly.
  - Elevate the affected area if possible.
  - Monitor for spreading redness or necrotic tissue.
  ! Seek help for Black Widow or Brown Recluse bites.

Ant Bites (Fire Ants)
  - Wash gently to avoid breaking blisters.
  - Use antihistamine cream for itching.
  - Watch for signs of infection.

Mosquito & Tick Bites
  - Remove ticks with fine-tipped tweezers immediately.
  - Apply anti-itch cream or calamine lotion.
  - Watch for \"bullseye\" rash (Lyme disease).
";

/// Eco-friendly pest control reference.
pub const GARDEN_SOLUTIONS: &str = "\
Eco-Friendly Garden Solutions
Protect your plants without harming the ecosystem.

Beneficial Insects
  Introduce natural predators to control pest populations naturally.
  Ladybugs (for Aphids) | Lacewings | Praying Mantises

Neem Oil & Soap Sprays
  Simple homemade mixtures can deter soft-bodied insects like aphids,
  mites, and mealybugs.
  Recipe: Mix 1 teaspoon of mild liquid soap and 1 teaspoon of Neem oil
  per liter of water. Spray in the evening.

Companion Planting
  Plant specific crops together to repel pests naturally.
  Marigolds - Repels nematodes & beetles
  Basil     - Repels flies & mosquitoes
  Mint      - Deters ants & cabbage moths
";
