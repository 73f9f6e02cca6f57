//! Built-in graph schema summary handed to the LLM calls

/// Node labels, their properties and the relationship types of the game
/// graph, in the shape the translation prompt expects.
pub const GRAPH_SCHEMA: &str = "\
Nodes:
- Hero { name: String, id: String, baseHealth: Float, baseMana: Float, baseArmor: Float, moveSpeed: Float, attackRange: Float, legs: Integer, img: String }
- Ability { name: String, key: String, description: String, manaCost: Float, cooldown: Float, img: String }
- Item { name: String, key: String, cost: Float, lore: String, notes: String, tier: Integer, attributes: String }
- Attribute { name: String }            // Strength, Agility, Intelligence, Universal
- Role { name: String }                 // Carry, Support, Nuker, Disabler, Jungler, Durable, Escape, Pusher, Initiator
- AttackType { name: String }           // Melee, Ranged
- Behavior { name: String }
- DamageType { name: String }
- Facet { name: String, description: String }
- ItemAbility { name: String, description: String, type: String }

Relationships:
- (:Hero)-[:HAS_PRIMARY_ATTR]->(:Attribute)
- (:Hero)-[:HAS_ROLE]->(:Role)
- (:Hero)-[:HAS_ATTACK_TYPE]->(:AttackType)
- (:Hero)-[:HAS_ABILITY]->(:Ability)
- (:Hero)-[:HAS_ULTIMATE]->(:Ability)
- (:Hero)-[:HAS_FACET]->(:Facet)
- (:Ability)-[:HAS_BEHAVIOR]->(:Behavior)
- (:Ability)-[:DEALS_DAMAGE_TYPE]->(:DamageType)
- (:Item)-[:HAS_BEHAVIOR]->(:Behavior)
- (:Item)-[:HAS_ABILITY]->(:ItemAbility)
- (:Item)-[:REQUIRES_COMPONENT]->(:Item)";
