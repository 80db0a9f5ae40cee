//! Keyword emotion cues in user utterances.
//!
//! A cheap first pass before asking a language model: the utterance is lowercased
//! and matched by substring against three keyword sets, checked in the order
//! happy, sad, neutral. The first set with a hit decides.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// Default happy keywords
pub const HAPPY_KEYWORDS: [&str; 67] = [
	"vui", "thích", "cười", "hạnh phúc", "tuyệt vời", "hay quá", "thích mê", "sướng quá", "khoái",
	"tuyệt cú mèo", "haha", "hihi", "hì hì", "vui quá", "thích quá", "hay ghê", "thích ghê", "đã quá",
	"được quà", "được khen", "được thưởng", "được tặng", "có đồ chơi mới", "quà", "điểm 10",
	"điểm cao", "được điểm tốt", "làm đúng rồi", "bài dễ", "đi chơi", "gặp bạn", "công viên",
	"xem phim", "đi sở thú", "đi du lịch", "xem xiếc", "cắm trại", "hào hứng", "phấn khích", "wow",
	"ồ", "á", "thắng rồi", "làm được rồi", "thành công", "được yêu", "yêu mẹ", "yêu bố", "thương",
	"quý", "thân", "sinh nhật", "tết", "noel", "trung thu", "lễ hội", "ngon", "ngon quá",
	"được ăn kẹo", "ăn bánh", "uống trà sữa", "kem", "đồng ý", "cầu hôn", "tuyệt", "xuất sắc", "giỏi",
];

/// Default sad keywords
pub const SAD_KEYWORDS: [&str; 62] = [
	"buồn", "khóc", "mếu", "chán", "tủi thân", "cô đơn", "một mình", "thất vọng", "buồn quá",
	"chán quá", "buồn ghê", "huhu", "oa oa", "rầu rĩ", "ủ rũ", "bị mắng", "bị phạt", "bị la",
	"bị trách", "điểm kém", "điểm thấp", "bị điểm 0", "không làm được bài", "bạn trêu", "bạn bắt nạt",
	"bạn đánh", "không ai chơi", "cãi nhau", "giận", "ghét", "bị tẩy chay", "nhớ mẹ", "nhớ bố",
	"nhớ nhà", "nhớ ông bà", "nhớ bạn", "mệt", "đau", "ốm", "sốt", "ho", "khó chịu", "mệt mỏi",
	"bị ngã", "chảy máu", "xây xước", "bị thương", "thua rồi", "mất rồi", "bị hỏng", "làm rơi",
	"bị vỡ", "tìm không thấy", "làm sai", "thất bại", "sợ", "sợ quá", "ma", "bóng tối", "ác mộng",
	"kinh dị", "hãi",
];

/// Default neutral keywords
pub const NEUTRAL_KEYWORDS: [&str; 118] = [
	"chào", "hello", "hi", "tạm biệt", "bye", "gặp lại sau", "chào bạn", "chào cậu", "cảm ơn",
	"cám ơn", "thank you", "thanks", "xin lỗi", "sorry", "thứ lỗi", "bình thường", "cũng được", "dạ",
	"vâng", "ạ", "ok", "okay", "được", "không", "à", "ừ", "đúng rồi", "chắc chắn", "tất nhiên", "có",
	"không có", "à ừm", "ờm", "gì", "đâu", "nào", "sao", "thế nào", "tại sao", "khi nào", "ai",
	"ai đấy", "mấy giờ", "bao nhiêu", "cái gì", "con gì", "ở đâu", "chỗ nào", "làm sao",
	"bằng cách nào", "phải không", "đúng không", "hả", "nhỉ", "học bài", "đọc truyện", "xem tivi",
	"ăn cơm", "đi ngủ", "đi học", "vẽ", "vẽ tranh", "nghe nhạc", "làm toán", "viết chữ", "đánh vần",
	"tập đọc", "tập viết", "tiếng việt", "tiếng anh", "kể cho", "nói cho", "đọc cho", "viết cho",
	"chỉ cho", "giúp tớ", "chuyện gì", "cái này", "cái kia", "thử xem", "tiếp đi", "là sao",
	"một cộng một", "hai nhân hai", "hình tròn", "hình vuông", "hình tam giác", "con mèo", "con chó",
	"con cá", "con chim", "bông hoa", "cái cây", "bầu trời", "mặt trời", "mặt trăng", "bố", "mẹ",
	"ông", "bà", "anh", "chị", "em", "cô giáo", "thầy giáo", "cái bút", "quyển vở", "cục tẩy",
	"thước kẻ", "cặp sách", "đồ chơi", "xe ô tô", "búp bê", "màu đỏ", "màu xanh", "màu vàng",
	"màu đen", "màu trắng",
];

/// Keyword sets, each replaceable from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CueKeywords {
	/// Happy keywords
	pub happy: Vec<String>,
	/// Sad keywords
	pub sad: Vec<String>,
	/// Neutral keywords
	pub neutral: Vec<String>,
}

impl Default for CueKeywords {
	fn default() -> Self {
		let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
		Self {
			happy: owned(&HAPPY_KEYWORDS),
			sad: owned(&SAD_KEYWORDS),
			neutral: owned(&NEUTRAL_KEYWORDS),
		}
	}
}

/// Classifies utterances by keyword
#[derive(Debug, Clone)]
pub struct CueClassifier {
	sets: [(Emotion, Vec<String>); 3],
}

impl Default for CueClassifier {
	fn default() -> Self {
		Self::new(CueKeywords::default())
	}
}

impl CueClassifier {
	/// Creates a classifier; keywords are lowercased and blanks dropped
	pub fn new(keywords: CueKeywords) -> Self {
		let normalize = |words: Vec<String>| -> Vec<String> {
			words.into_iter().map(|w| w.trim().to_lowercase()).filter(|w| !w.is_empty()).collect()
		};
		Self {
			sets: [
				(Emotion::Happy, normalize(keywords.happy)),
				(Emotion::Sad, normalize(keywords.sad)),
				(Emotion::Neutral, normalize(keywords.neutral)),
			],
		}
	}

	/// Emotion of the first keyword set matching `text`, if any
	pub fn classify(&self, text: &str) -> Option<Emotion> {
		self.matching(text).map(|(emotion, _)| emotion)
	}

	/// Like [`Self::classify`], also returning the keyword that matched
	pub fn matching(&self, text: &str) -> Option<(Emotion, &str)> {
		let lowered = text.to_lowercase();
		for (emotion, words) in &self.sets {
			if let Some(word) = words.iter().find(|w| lowered.contains(w.as_str())) {
				debug!("Cue '{}' -> {}", word, emotion);
				return Some((*emotion, word.as_str()));
			}
		}
		None
	}
}
