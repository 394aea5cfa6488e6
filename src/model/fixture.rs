//! Placard list fixture: the mock `/placardInfo/list` response envelope.
//!
//! This is demo and test data only. Each page holds [`PAGE_SIZE`] synthetic
//! records; the envelope keeps the wire keys of the mock API so fixture
//! files produced elsewhere deserialize unchanged.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Records per page.
pub const PAGE_SIZE: u32 = 30;

/// Total record count advertised by every page.
pub const TOTAL_RECORDS: u64 = 1100;

/// Page count advertised by every page.
pub const TOTAL_PAGES: u32 = 8;

/// Envelope message on success.
pub const SUCCESS_MESSAGE: &str = "操作成功";

/// Placard body shared by every generated record.
pub const PLACARD_CONTENT: &str = "推行“党员固定活动日”让“三会一课”活起来";

/// Records are dated at most this many days before generation time.
const MAX_AGE_DAYS: i64 = 365;

const FAMILY_NAMES: &[&str] = &[
    "赵", "钱", "孙", "周", "吴", "郑", "王", "冯", "陈", "叶", "褚", "卫", "蒋", "沈", "韩", "杨",
    "朱", "秦", "尤", "许", "何", "吕", "施", "张", "孔", "曹", "严", "华", "金", "魏", "陶", "姜",
    "戚", "谢", "邹", "喻", "柏", "水", "窦", "章", "云", "苏", "潘", "葛", "奚", "范", "彭", "郎",
    "鲁", "韦", "昌", "马", "苗", "凤", "花", "方", "俞", "任", "袁", "柳", "酆", "鲍", "史", "唐",
    "费", "廉", "岑", "薛", "雷", "贺", "倪", "汤", "滕", "殷", "罗", "毕", "郝", "邬", "安", "常",
    "乐", "于", "时", "傅", "皮", "卞", "齐", "康", "伍", "余", "元", "卜", "顾", "孟", "平", "黄",
    "和", "穆", "萧", "尹",
];

const GIVEN_NAMES: &[&str] = &[
    "子璇", "淼", "国栋", "夫子", "瑞堂", "甜", "敏", "尚", "国贤", "贺祥", "晨涛", "昊轩", "易轩",
    "益辰", "益帆", "益冉", "瑾春", "瑾昆", "春齐", "杨", "文昊", "东东", "雄霖", "浩晨", "熙涵",
    "溶溶", "冰枫", "欣欣", "宜豪", "欣慧", "建政", "美欣", "淑慧", "文轩", "文杰", "欣源", "忠林",
    "榕润", "欣汝", "慧嘉", "新建", "建林", "亦菲", "林", "冰洁", "佳欣", "涵涵", "禹辰", "淳美",
    "泽惠", "伟洋", "涵越", "润丽", "翔", "淑华", "晶莹", "凌晶", "苒溪", "雨涵", "嘉怡", "佳毅",
    "子辰", "佳琪", "紫轩", "瑞辰", "昕蕊", "萌", "明远", "欣宜", "泽远", "欣怡", "佳怡", "佳惠",
    "晨茜", "晨璐", "运昊", "汝鑫", "淑君", "晶滢", "润莎", "榕汕", "佳钰", "佳玉", "晓庆", "一鸣",
    "语晨", "添池", "添昊", "雨泽", "雅晗", "雅涵", "清妍", "诗悦", "嘉乐", "晨涵", "天赫", "玥傲",
    "佳昊", "天昊", "萌萌", "若萌",
];

/// One placard announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacardRecord {
    /// Unique id: `page_num * PAGE_SIZE + index`.
    pub id: u64,
    /// Announcement body.
    #[serde(rename = "公告内容")]
    pub content: String,
    /// Announcement type, `0` or `1`.
    #[serde(rename = "公告类型")]
    pub kind: u8,
    /// Sender display name.
    #[serde(rename = "发送人")]
    pub sender: String,
    /// Send time as epoch milliseconds.
    #[serde(rename = "时间")]
    pub time: i64,
}

impl PlacardRecord {
    /// Send time as a UTC timestamp, `None` if out of chrono's range.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

/// Paged list payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacardList {
    /// Records on this page.
    pub list: Vec<PlacardRecord>,
    /// Total records across all pages.
    pub total: u64,
    /// Page number reported by the mock (always 0).
    pub page_num: u32,
    /// Records per page.
    pub page_size: u32,
    /// Total page count.
    pub total_page: u32,
}

/// Response envelope `{ code, path, data, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacardPage {
    /// Status code, `0` on success.
    pub code: i32,
    /// The requested page number echoed back.
    pub path: u32,
    /// Paged payload.
    pub data: PlacardList,
    /// Human-readable status.
    pub message: String,
}

/// Generate one page of synthetic records.
///
/// Record times fall within the year before `now`.
pub fn generate_page<R: Rng + ?Sized>(page_num: u32, now: DateTime<Utc>, rng: &mut R) -> PlacardPage {
    let base = u64::from(page_num) * u64::from(PAGE_SIZE);
    let list = (0..PAGE_SIZE)
        .map(|index| {
            let family = FAMILY_NAMES[rng.random_range(0..FAMILY_NAMES.len())];
            let given = GIVEN_NAMES[rng.random_range(0..GIVEN_NAMES.len())];
            let age = TimeDelta::days(rng.random_range(0..MAX_AGE_DAYS));
            PlacardRecord {
                id: base + u64::from(index),
                content: PLACARD_CONTENT.to_string(),
                kind: rng.random_range(0..2u8),
                sender: format!("{family}{given}"),
                time: (now - age).timestamp_millis(),
            }
        })
        .collect();

    PlacardPage {
        code: 0,
        path: page_num,
        data: PlacardList {
            list,
            total: TOTAL_RECORDS,
            page_num: 0,
            page_size: PAGE_SIZE,
            total_page: TOTAL_PAGES,
        },
        message: SUCCESS_MESSAGE.to_string(),
    }
}
