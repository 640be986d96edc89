use super::tone::Tone;

/// A tone-specific emphasis rule.
///
/// Every whole-word, case-insensitive occurrence of one of `words` is
/// prefixed by `intensifier`.
#[derive(Debug)]
pub struct EmphasisRule {
	pub words: &'static [&'static str],
	pub intensifier: &'static str,
}

/// Candidate lists used by the sentence transformers for one tone.
///
/// # Invariants
/// - Every list is non-empty (checked by tests).
#[derive(Debug)]
pub struct ToneLexicon {
	pub personal_phrases: &'static [&'static str],
	pub thought_pauses: &'static [&'static str],
	pub sentence_starters: &'static [&'static str],
	pub fillers: &'static [&'static str],
	pub emotions: &'static [&'static str],
	pub emphasis: &'static [EmphasisRule],
}

impl ToneLexicon {
	/// Returns the lexicon row for `tone`.
	pub fn for_tone(tone: Tone) -> &'static ToneLexicon {
		match tone {
			Tone::Casual => &CASUAL,
			Tone::Formal => &FORMAL,
			Tone::Persuasive => &PERSUASIVE,
		}
	}
}

static CASUAL: ToneLexicon = ToneLexicon {
	personal_phrases: &[
		"you know what I mean?",
		"let's be honest here",
		"just between us",
		"I gotta say",
		"for real",
		"to be real with you",
		"here's the scoop",
		"no kidding",
		"seriously though",
		"let me break it down for you",
	],
	// A bare "..." marker would render as six periods, which cleanup erases
	// together with the previous sentence's full stop.
	thought_pauses: &["hmm", "uh", "um", "like", "well", "err", "mhm", "right", "yeah"],
	sentence_starters: &[
		"so,",
		"anyway,",
		"but honestly,",
		"right,",
		"okay,",
		"basically,",
		"you see,",
		"let's talk about this,",
	],
	fillers: &["like", "you know", "sort of", "kind of", "I mean", "basically", "pretty much"],
	emotions: &["haha", "wow", "yikes", "oof", "no way"],
	emphasis: &[
		EmphasisRule { words: &["good", "great", "nice"], intensifier: "really" },
		EmphasisRule { words: &["bad", "terrible", "awful"], intensifier: "super" },
		EmphasisRule { words: &["interesting", "cool", "awesome"], intensifier: "totally" },
		EmphasisRule { words: &["amazing", "incredible"], intensifier: "absolutely" },
	],
};

static FORMAL: ToneLexicon = ToneLexicon {
	personal_phrases: &[
		"in my professional view",
		"based on my observations",
		"considering the facts",
		"after thorough analysis",
		"upon careful review",
		"in light of the evidence",
		"from my standpoint",
		"taking into account",
	],
	thought_pauses: &["indeed", "certainly", "notably", "interestingly", "curiously"],
	sentence_starters: &["moreover,", "furthermore,", "additionally,", "consequently,", "therefore,"],
	fillers: &["essentially", "primarily", "fundamentally"],
	emotions: &["fascinating", "remarkable", "intriguing"],
	emphasis: &[
		EmphasisRule { words: &["significant", "important"], intensifier: "particularly" },
		EmphasisRule { words: &["effective", "efficient"], intensifier: "highly" },
	],
};

static PERSUASIVE: ToneLexicon = ToneLexicon {
	personal_phrases: &[
		"here's the crux of the matter",
		"let me clarify this",
		"I assure you",
		"mark my words on this",
		"you can trust me on this",
		"let's be clear",
		"the bottom line is",
	],
	thought_pauses: &["listen", "consider this", "think about it", "imagine this"],
	sentence_starters: &["importantly,", "significantly,", "crucially,", "notably,"],
	fillers: &["absolutely", "definitely", "certainly"],
	emotions: &["incredible", "amazing", "fantastic"],
	emphasis: &[
		EmphasisRule { words: &["essential", "crucial"], intensifier: "absolutely" },
		EmphasisRule { words: &["beneficial", "helpful"], intensifier: "extremely" },
	],
};

/// Full-form phrases and their contracted forms, in application order.
pub static CONTRACTIONS: &[(&str, &str)] = &[
	("will not", "won't"),
	("cannot", "can't"),
	("could not", "couldn't"),
	("should not", "shouldn't"),
	("would not", "wouldn't"),
	("do not", "don't"),
	("does not", "doesn't"),
	("did not", "didn't"),
	("is not", "isn't"),
	("are not", "aren't"),
	("have not", "haven't"),
	("has not", "hasn't"),
	("had not", "hadn't"),
	("I am", "I'm"),
	("you are", "you're"),
	("they are", "they're"),
	("we are", "we're"),
	("it is", "it's"),
	("that is", "that's"),
	("what is", "what's"),
	("where is", "where's"),
	("when is", "when's"),
	("why is", "why's"),
	("how is", "how's"),
	("going to", "gonna"),
	("want to", "wanna"),
	("got to", "gotta"),
	("kind of", "kinda"),
	("sort of", "sorta"),
	("out of", "outta"),
	("trying to", "tryna"),
	("give me", "gimme"),
	("let me", "lemme"),
];

/// Casual-only slang substitutions: word and its candidate synonyms.
pub static COLLOQUIALISMS: &[(&str, &[&str])] = &[
	("very", &["super", "totally", "mad"]),
	("good", &["dope", "sick", "lit"]),
	("bad", &["trash", "whack", "sus"]),
	("amazing", &["insane", "wild", "crazy"]),
];

/// Stiff vocabulary and its plain replacement, applied in order to every sentence.
pub static VOCABULARY: &[(&[&str], &str)] = &[
	(&["utilize", "implementation", "facilitate", "leverage", "optimize"], "use"),
	(&["commence", "initiate"], "start"),
	(&["terminate", "conclude"], "end"),
	(&["purchase", "acquire"], "buy"),
	(&["inquire"], "ask"),
	(&["obtain"], "get"),
	(&["require"], "need"),
	(&["subsequently", "consequently"], "then"),
	(&["nevertheless", "however"], "but"),
	(&["additionally", "furthermore"], "also"),
	(&["regarding", "concerning"], "about"),
	(&["sufficient", "adequate"], "enough"),
	(&["attempt", "endeavor"], "try"),
	(&["numerous", "multiple"], "many"),
	(&["assist", "aid"], "help"),
];
